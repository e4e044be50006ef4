//! bitfill-test - Regression test framework for bitfill
//!
//! Provides [`RegParams`] for accumulating comparisons across a regression
//! test, plus canvas fixtures built from character grids or seeded random
//! data.
//!
//! # Usage
//!
//! ```ignore
//! use bitfill_test::RegParams;
//!
//! let mut rp = RegParams::new("floodfill");
//! rp.compare_values(16.0, filled as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    canvas_from_rows, random_canvas, random_color_canvas, render_grid, solid_canvas,
};
pub use params::{RegParams, RegTestMode};
