//! Pixel coordinates with a precomputed buffer offset

use crate::layout::BYTES_PER_PIXEL;

/// A grid position together with its byte offset into a BGRA buffer.
///
/// Created per visit and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    x: u32,
    y: u32,
    offset: usize,
}

impl PixelCoord {
    /// Build a coordinate for a surface `width` pixels wide.
    ///
    /// No bounds check is done; see [`PixelCoord::checked`].
    #[inline]
    pub fn new(x: u32, y: u32, width: u32) -> Self {
        let offset = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
        Self { x, y, offset }
    }

    /// Build a coordinate if `(x, y)` lies inside `[0, width) x [0, height)`.
    ///
    /// Takes signed inputs so neighbors of edge pixels can be expressed.
    #[inline]
    pub fn checked(x: i64, y: i64, width: u32, height: u32) -> Option<Self> {
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return None;
        }
        Some(Self::new(x as u32, y as u32, width))
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// Row-major pixel index, `y * width + x`.
    pub fn index(&self) -> usize {
        self.offset / BYTES_PER_PIXEL
    }

    /// Byte offset of the pixel's first (blue) channel.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
