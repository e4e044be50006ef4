//! Pixel surfaces
//!
//! [`Surface`] is the minimal capability the fill engine needs from a
//! drawing backend: dimensions, a snapshot of the raw BGRA bytes, and a way
//! to commit a whole buffer back.
//!
//! # Buffer semantics
//!
//! Copy-out / write-back. [`Surface::data`] returns an owned copy of the
//! pixel bytes; [`Surface::set_data`] replaces the entire buffer. Changes to
//! the copy are invisible to the surface until they are written back.
//!
//! [`Canvas`] is the in-crate implementation, an owned row-major buffer.

use crate::color::{Color, Quantize, Rgb};
use crate::coord::PixelCoord;
use crate::error::{Error, Result};
use crate::layout;

/// A pixel surface the fill engine can read and write.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Snapshot of the raw pixel data, BGRA, `width * height * 4` bytes.
    fn data(&self) -> Vec<u8>;

    /// Replace the raw pixel data.
    ///
    /// Callers pass a buffer of the same length [`Surface::data`] returned.
    fn set_data(&mut self, data: Vec<u8>);
}

/// An owned BGRA pixel surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a canvas of transparent black pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; layout::buffer_len(width, height)],
        })
    }

    /// Wrap an existing BGRA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `data` is not `width * height * 4` bytes.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = layout::buffer_len(width, height);
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Paint every pixel with an opaque color.
    pub fn clear_rgb(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(layout::BYTES_PER_PIXEL) {
            px[layout::RED] = color.r;
            px[layout::GREEN] = color.g;
            px[layout::BLUE] = color.b;
            px[layout::ALPHA] = 255;
        }
    }

    /// Paint every pixel with a normalized color, rounding channels.
    pub fn clear_color(&mut self, color: Color) {
        self.clear_rgb(color.to_rgb(Quantize::Round));
    }

    fn coord(&self, x: u32, y: u32) -> Option<PixelCoord> {
        PixelCoord::checked(i64::from(x), i64::from(y), self.width, self.height)
    }

    /// Get `(r, g, b, a)` at `(x, y)`, or `None` outside the canvas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let c = self.coord(x, y)?;
        let rgb = Rgb::read(&self.data, c);
        Some((rgb.r, rgb.g, rgb.b, self.data[c.offset() + layout::ALPHA]))
    }

    /// Get the color channels at `(x, y)`, or `None` outside the canvas.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        self.coord(x, y).map(|c| Rgb::read(&self.data, c))
    }

    /// Set the color channels at `(x, y)`; alpha is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the canvas.
    pub fn set_rgb(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        let c = self.coord(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        color.write(&mut self.data, c);
        Ok(())
    }

    /// Paint the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the
    /// canvas.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                color.write(&mut self.data, PixelCoord::new(x, y, self.width));
            }
        }
    }

    /// Number of pixels whose color channels equal `color` exactly.
    pub fn count_rgb(&self, color: Rgb) -> usize {
        self.data
            .chunks_exact(layout::BYTES_PER_PIXEL)
            .filter(|px| {
                px[layout::RED] == color.r
                    && px[layout::GREEN] == color.g
                    && px[layout::BLUE] == color.b
            })
            .count()
    }

    /// Borrow the raw BGRA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas and return its buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn data(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// # Panics
    ///
    /// Panics if `data` is not `width * height * 4` bytes.
    fn set_data(&mut self, data: Vec<u8>) {
        assert_eq!(
            data.len(),
            self.data.len(),
            "buffer length does not match {}x{} canvas",
            self.width,
            self.height
        );
        self.data = data;
    }
}
