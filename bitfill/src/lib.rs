//! bitfill - Paint-bucket flood fill for Rust
//!
//! # Overview
//!
//! - Pixel surfaces ([`Surface`], [`Canvas`]) with a BGRA byte layout
//! - 8-bit and normalized colors ([`Rgb`], [`Color`])
//! - Threshold flood fill over 4-connected regions ([`region`])
//!
//! # Example
//!
//! ```
//! use bitfill::{Canvas, Rgb};
//! use bitfill::region::flood_fill;
//!
//! let mut canvas = Canvas::new(8, 8).unwrap();
//! canvas.clear_rgb(Rgb::WHITE);
//! canvas.fill_rect(0, 4, 8, 5, Rgb::BLACK);
//!
//! // The black line splits the canvas; only the top half is filled
//! let outcome = flood_fill(&mut canvas, 2.0, 1.0, 1.0, 0.0, 0.0, 0.0);
//! assert_eq!(outcome.pixels_filled(), 32);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitfill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bitfill_region as region;
