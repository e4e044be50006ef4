//! Canvas fixtures for tests

use crate::error::{TestError, TestResult};
use bitfill_core::{Canvas, Rgb, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A canvas painted with one opaque color
pub fn solid_canvas(width: u32, height: u32, color: Rgb) -> Canvas {
    let mut canvas = match Canvas::new(width, height) {
        Ok(c) => c,
        Err(e) => panic!("Failed to create {}x{} canvas: {}", width, height, e),
    };
    canvas.clear_rgb(color);
    canvas
}

/// Build a canvas from rows of characters
///
/// Each character is looked up in `palette`; all rows must have the same
/// length. Pixels are opaque.
///
/// ```
/// use bitfill_core::Rgb;
/// use bitfill_test::canvas_from_rows;
///
/// let canvas = canvas_from_rows(&["#.", ".#"], &[('#', Rgb::BLACK), ('.', Rgb::WHITE)]).unwrap();
/// assert_eq!(canvas.get_rgb(1, 0), Some(Rgb::WHITE));
/// ```
pub fn canvas_from_rows(rows: &[&str], palette: &[(char, Rgb)]) -> TestResult<Canvas> {
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    let mut canvas = Canvas::new(width as u32, rows.len() as u32)?;
    canvas.clear_rgb(Rgb::BLACK);

    for (y, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().collect();
        if cells.len() != width {
            return Err(TestError::RaggedRow {
                row: y,
                expected: width,
                actual: cells.len(),
            });
        }
        for (x, cell) in cells.into_iter().enumerate() {
            let (x, y) = (x as u32, y as u32);
            let color = palette
                .iter()
                .find(|(c, _)| *c == cell)
                .map(|(_, rgb)| *rgb)
                .ok_or(TestError::UnknownCell { cell, x, y })?;
            canvas.set_rgb(x, y, color)?;
        }
    }
    Ok(canvas)
}

/// Render a canvas as rows of characters, the inverse of [`canvas_from_rows`]
///
/// Colors missing from `legend` render as `?`.
pub fn render_grid(canvas: &Canvas, legend: &[(char, Rgb)]) -> String {
    let mut out = String::new();
    for y in 0..canvas.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..canvas.width() {
            let ch = canvas
                .get_rgb(x, y)
                .and_then(|rgb| legend.iter().find(|(_, c)| *c == rgb))
                .map(|(ch, _)| *ch)
                .unwrap_or('?');
            out.push(ch);
        }
    }
    out
}

/// A canvas of random gray levels, reproducible from `seed`
///
/// Each pixel gets one of `levels` evenly spaced gray values, so regions of
/// equal color form with useful frequency.
pub fn random_canvas(width: u32, height: u32, levels: u8, seed: u64) -> Canvas {
    let mut rng = StdRng::seed_from_u64(seed);
    let levels = levels.max(1);
    let step = 255 / u32::from(levels);
    let mut canvas = solid_canvas(width, height, Rgb::BLACK);
    for y in 0..height {
        for x in 0..width {
            let v = (rng.gen_range(0..u32::from(levels)) * step) as u8;
            if let Err(e) = canvas.set_rgb(x, y, Rgb::new(v, v, v)) {
                panic!("Failed to set fixture pixel: {}", e);
            }
        }
    }
    canvas
}

/// Random canvas with independent channels drawn from the full byte range
pub fn random_color_canvas(width: u32, height: u32, seed: u64) -> Canvas {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut canvas = solid_canvas(width, height, Rgb::BLACK);
    for y in 0..height {
        for x in 0..width {
            let rgb = Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen());
            if let Err(e) = canvas.set_rgb(x, y, rgb) {
                panic!("Failed to set fixture pixel: {}", e);
            }
        }
    }
    canvas
}
