//! Color types
//!
//! Two representations are used throughout the workspace:
//!
//! - [`Color`] - normalized RGBA with each channel in `[0.0, 1.0]`, the form
//!   drawing code passes around
//! - [`Rgb`] - three 8-bit channels, the form pixel buffers store
//!
//! [`Quantize`] decides how a normalized value becomes an 8-bit one.

use crate::coord::PixelCoord;
use crate::layout;

/// Conversion policy from a normalized `[0.0, 1.0]` value to `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantize {
    /// `floor(v * 255)`
    #[default]
    Truncate,
    /// `round(v * 255)`
    Round,
}

impl Quantize {
    /// Convert a normalized value to an 8-bit integer.
    ///
    /// Scaled values are clamped into `0..=255`; NaN becomes 0.
    pub fn to_u8(self, value: f64) -> u8 {
        let scaled = value * 255.0;
        let scaled = match self {
            Quantize::Truncate => scaled.trunc(),
            Quantize::Round => scaled.round(),
        };
        // `as` saturates and maps NaN to 0
        scaled as u8
    }
}

/// An 8-bit RGB color. Alpha never takes part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read the color channels of the pixel at `coord` from a BGRA buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is too short for `coord`.
    #[inline]
    pub fn read(data: &[u8], coord: PixelCoord) -> Self {
        let i = coord.offset();
        Self {
            r: data[i + layout::RED],
            g: data[i + layout::GREEN],
            b: data[i + layout::BLUE],
        }
    }

    /// Write the color channels of the pixel at `coord`, leaving alpha alone.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is too short for `coord`.
    #[inline]
    pub fn write(self, data: &mut [u8], coord: PixelCoord) {
        let i = coord.offset();
        data[i + layout::RED] = self.r;
        data[i + layout::GREEN] = self.g;
        data[i + layout::BLUE] = self.b;
    }

    /// Largest absolute difference over the three channels.
    #[inline]
    pub fn max_channel_diff(self, other: Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    /// Whether every channel differs from `other` by at most `tolerance`.
    #[inline]
    pub fn is_similar(self, other: Rgb, tolerance: u8) -> bool {
        self.max_channel_diff(other) <= tolerance
    }

    /// Compose a color from a 24-bit `0xRRGGBB` value.
    pub fn from_number(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

/// A normalized RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque color from normalized channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from normalized channels including alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn rgb_hex(r: u8, g: u8, b: u8) -> Self {
        Self::rgba_hex(r, g, b, 255)
    }

    /// Color from 8-bit channels including alpha.
    pub fn rgba_hex(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Opaque color from a 24-bit `0xRRGGBB` value.
    pub fn from_number(value: u32) -> Self {
        let c = Rgb::from_number(value);
        Self::rgb_hex(c.r, c.g, c.b)
    }

    /// Linear interpolation between two colors, alpha included.
    pub fn lerp(from: Color, to: Color, t: f64) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Convert to 8-bit channels.
    pub fn to_rgb(self, quantize: Quantize) -> Rgb {
        Rgb::new(
            quantize.to_u8(self.r),
            quantize.to_u8(self.g),
            quantize.to_u8(self.b),
        )
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::rgb_hex(c.r, c.g, c.b)
    }
}
