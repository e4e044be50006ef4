//! bitfill-region - Region filling for bitfill surfaces
//!
//! This crate provides the paint-bucket flood fill:
//!
//! - **Flood fill** - recolor the 4-connected region of pixels similar to a
//!   seed pixel, in place
//!
//! # Examples
//!
//! ```
//! use bitfill_core::{Canvas, Rgb};
//! use bitfill_region::{FillOutcome, flood_fill};
//!
//! let mut canvas = Canvas::new(4, 4).unwrap();
//! canvas.clear_rgb(Rgb::BLACK);
//!
//! // Fill from the top-left corner with white
//! let outcome = flood_fill(&mut canvas, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0);
//! assert_eq!(outcome, FillOutcome::Filled { pixels: 16 });
//! assert_eq!(canvas.count_rgb(Rgb::WHITE), 16);
//! ```

pub mod error;
pub mod floodfill;

// Re-export core types
pub use bitfill_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export floodfill types and functions
pub use floodfill::{
    FillOutcome, FloodFillOptions, checked_flood_fill, fill_buffer, flood_fill, flood_fill_with,
};
