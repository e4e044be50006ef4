//! Paint-bucket flood fill
//!
//! Recolors the maximal 4-connected region of pixels whose color is within a
//! tolerance of the seed pixel's original color. Matching uses independent
//! per-channel bounds on red, green and blue (alpha is ignored):
//!
//! ```text
//! |r1 - r2| <= t  &&  |g1 - g2| <= t  &&  |b1 - b2| <= t
//! ```
//!
//! The fill grows breadth-first from the seed using a FIFO queue of pixels
//! that are already recolored but whose neighbors are not yet checked.
//! Every comparison is against the target color captured once before the
//! fill starts, so the final coloring does not depend on traversal order.
//!
//! Out-of-bounds seeds and seeds that already match the replacement color
//! are no-ops, reported through [`FillOutcome`] rather than as errors.
//!
//! # Saturated threshold
//!
//! A threshold of `1.0` quantizes to a tolerance of 255, which matches every
//! color. Such a fill repaints the whole surface, and is a no-op only when
//! every pixel already holds the replacement.

use crate::error::{RegionError, RegionResult};
use bitfill_core::{Color, Error, PixelCoord, Quantize, Rgb, Surface, layout};
use log::{debug, trace};
use std::collections::VecDeque;

/// Options for flood fill operations
#[derive(Debug, Clone, PartialEq)]
pub struct FloodFillOptions {
    /// Normalized similarity tolerance in `[0.0, 1.0]`
    pub threshold: f64,
    /// How normalized colors and the threshold become 8-bit values
    pub quantize: Quantize,
}

impl Default for FloodFillOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            quantize: Quantize::Truncate,
        }
    }
}

impl FloodFillOptions {
    /// Create options with the given normalized threshold
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the normalized threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the quantization policy
    pub fn with_quantize(mut self, quantize: Quantize) -> Self {
        self.quantize = quantize;
        self
    }

    /// The 8-bit per-channel tolerance these options describe.
    pub fn tolerance(&self) -> u8 {
        self.quantize.to_u8(self.threshold)
    }
}

/// What a fill call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The seed was outside the surface; nothing changed
    OutOfBounds { x: i64, y: i64 },
    /// The seed already matched the replacement color; nothing changed
    AlreadyFilled,
    /// The region was recolored
    Filled {
        /// Number of pixels recolored, seed included
        pixels: usize,
    },
}

impl FillOutcome {
    /// Whether the call left the surface untouched.
    pub fn is_noop(&self) -> bool {
        !matches!(self, FillOutcome::Filled { .. })
    }

    /// Number of pixels recolored (zero for no-ops).
    pub fn pixels_filled(&self) -> usize {
        match self {
            FillOutcome::Filled { pixels } => *pixels,
            _ => 0,
        }
    }
}

/// Truncate a real coordinate toward zero. NaN maps to 0.
#[inline]
fn seed_coord(v: f64) -> i64 {
    v as i64
}

/// Flood fill a surface from `(x, y)` with normalized channels.
///
/// Fractional seed coordinates are truncated toward zero. The replacement
/// channels and `threshold` are normalized values in `[0.0, 1.0]`, truncated
/// to 8 bits.
///
/// # Returns
///
/// The [`FillOutcome`]; the surface is written back only for
/// [`FillOutcome::Filled`].
pub fn flood_fill<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    r: f64,
    g: f64,
    b: f64,
    threshold: f64,
) -> FillOutcome {
    flood_fill_with(
        surface,
        x,
        y,
        Color::rgb(r, g, b),
        &FloodFillOptions::new(threshold),
    )
}

/// Flood fill a surface from `(x, y)` with a [`Color`] and explicit options.
pub fn flood_fill_with<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    color: Color,
    options: &FloodFillOptions,
) -> FillOutcome {
    let (xi, yi) = (seed_coord(x), seed_coord(y));
    let (w, h) = (surface.width(), surface.height());

    // Avoid copying the buffer for a seed that can't hit anything
    if PixelCoord::checked(xi, yi, w, h).is_none() {
        debug!("flood fill seed ({xi}, {yi}) outside {w}x{h} surface");
        return FillOutcome::OutOfBounds { x: xi, y: yi };
    }

    let replacement = color.to_rgb(options.quantize);
    let mut data = surface.data();
    let outcome = fill_buffer(&mut data, w, h, xi, yi, replacement, options.tolerance());

    if let FillOutcome::Filled { .. } = outcome {
        surface.set_data(data);
    }
    outcome
}

/// Strict variant of [`flood_fill_with`] for callers that want feedback.
///
/// # Returns
///
/// The number of pixels recolored; `Ok(0)` when the seed already matches.
///
/// # Errors
///
/// - [`RegionError::InvalidParameters`] if the threshold is not a finite
///   value in `[0.0, 1.0]`
/// - [`RegionError::InvalidSeed`] if the seed is outside the surface
/// - [`RegionError::Core`] if the surface buffer has the wrong length
pub fn checked_flood_fill<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    color: Color,
    options: &FloodFillOptions,
) -> RegionResult<usize> {
    if !(0.0..=1.0).contains(&options.threshold) {
        return Err(RegionError::InvalidParameters(format!(
            "threshold must be in [0, 1], got {}",
            options.threshold
        )));
    }

    let (xi, yi) = (seed_coord(x), seed_coord(y));
    let (w, h) = (surface.width(), surface.height());
    if PixelCoord::checked(xi, yi, w, h).is_none() {
        return Err(RegionError::InvalidSeed { x: xi, y: yi });
    }

    let mut data = surface.data();
    let expected = layout::buffer_len(w, h);
    if data.len() != expected {
        return Err(Error::BufferLength {
            expected,
            actual: data.len(),
        }
        .into());
    }

    let replacement = color.to_rgb(options.quantize);
    let outcome = fill_buffer(&mut data, w, h, xi, yi, replacement, options.tolerance());
    if let FillOutcome::Filled { .. } = outcome {
        surface.set_data(data);
    }
    Ok(outcome.pixels_filled())
}

/// Flood fill a raw BGRA buffer in place.
///
/// This is the engine behind the surface-level entry points. `data` must be
/// `width * height * 4` bytes; a shorter buffer panics.
///
/// # Arguments
///
/// * `data` - Row-major BGRA pixel bytes, modified in place
/// * `width`, `height` - Surface dimensions in pixels
/// * `seed_x`, `seed_y` - Seed position
/// * `replacement` - Color written into the region
/// * `tolerance` - Maximum per-channel difference counted as a match
pub fn fill_buffer(
    data: &mut [u8],
    width: u32,
    height: u32,
    seed_x: i64,
    seed_y: i64,
    replacement: Rgb,
    tolerance: u8,
) -> FillOutcome {
    let Some(seed) = PixelCoord::checked(seed_x, seed_y, width, height) else {
        debug!("flood fill seed ({seed_x}, {seed_y}) outside {width}x{height} buffer");
        return FillOutcome::OutOfBounds {
            x: seed_x,
            y: seed_y,
        };
    };

    let target = Rgb::read(data, seed);
    // A saturated tolerance reaches every pixel, so there is nothing to do
    // only when the whole buffer already holds the replacement.
    let settled = if tolerance == u8::MAX {
        (0..height).all(|y| {
            (0..width).all(|x| Rgb::read(data, PixelCoord::new(x, y, width)) == replacement)
        })
    } else {
        target.is_similar(replacement, tolerance)
    };
    if settled {
        debug!("flood fill seed color {target:?} already matches {replacement:?}");
        return FillOutcome::AlreadyFilled;
    }

    let mut visited = vec![false; width as usize * height as usize];
    visited[seed.index()] = true;
    replacement.write(data, seed);
    let mut pixels = 1usize;
    let mut peak = 1usize;
    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(c) = queue.pop_front() {
        let (x, y) = (i64::from(c.x()), i64::from(c.y()));
        // right, left, down, up
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            let Some(n) = PixelCoord::checked(nx, ny, width, height) else {
                continue;
            };
            if visited[n.index()] || !Rgb::read(data, n).is_similar(target, tolerance) {
                continue;
            }
            visited[n.index()] = true;
            replacement.write(data, n);
            pixels += 1;
            queue.push_back(n);
        }
        peak = peak.max(queue.len());
    }

    trace!("flood fill recolored {pixels} pixels, peak queue {peak}");
    FillOutcome::Filled { pixels }
}
