//! bitfill-core - Basic data structures for pixel surfaces
//!
//! This crate provides the types shared by the fill engine and its callers:
//!
//! - [`Surface`] - the capability a pixel surface exposes to the engine
//! - [`Canvas`] - an owned BGRA surface
//! - [`Rgb`] / [`Color`] - 8-bit and normalized colors
//! - [`PixelCoord`] - grid position with a precomputed byte offset
//! - [`layout`] - BGRA channel layout constants

pub mod color;
pub mod coord;
pub mod error;
pub mod surface;

pub use color::{Color, Quantize, Rgb};
pub use coord::PixelCoord;
pub use error::{Error, Result};
pub use surface::{Canvas, Surface};

/// Channel layout of a 32-bit pixel in a surface buffer.
///
/// # Pixel format
///
/// Pixels are stored row-major as four bytes: blue, green, red, alpha.
pub mod layout {
    /// Blue channel (byte 0)
    pub const BLUE: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Red channel (byte 2)
    pub const RED: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Bytes per pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Expected buffer length for a surface of the given size.
    #[inline]
    pub fn buffer_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }
}
