//! Flood fill regression test
//!
//! Run with:
//! ```
//! cargo test -p bitfill-region --test floodfill_reg
//! ```
//!
//! Print canvases while running:
//! ```
//! REGTEST_MODE=display cargo test -p bitfill-region --test floodfill_reg -- --nocapture
//! ```

use bitfill_core::{Canvas, Color, Quantize, Rgb, Surface};
use bitfill_region::{FillOutcome, FloodFillOptions, flood_fill, flood_fill_with};
use bitfill_test::{RegParams, canvas_from_rows, random_color_canvas, render_grid, solid_canvas};

const RED: Rgb = Rgb::new(255, 0, 0);

const LEGEND: &[(char, Rgb)] = &[('#', Rgb::BLACK), ('.', Rgb::WHITE), ('r', RED)];

fn rows(rows: &[&str]) -> Canvas {
    match canvas_from_rows(rows, LEGEND) {
        Ok(c) => c,
        Err(e) => panic!("Failed to build fixture: {}", e),
    }
}

#[test_log::test]
fn floodfill_reg() {
    let mut rp = RegParams::new("floodfill");

    // -----------------------------------------------------------
    // All-black 4x4, fill from the corner with white
    // -----------------------------------------------------------
    let mut canvas = solid_canvas(4, 4, Rgb::BLACK);
    let outcome = flood_fill(&mut canvas, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0);
    rp.compare_values(16.0, outcome.pixels_filled() as f64, 0.0);
    rp.compare_canvas(&solid_canvas(4, 4, Rgb::WHITE), &canvas);

    // -----------------------------------------------------------
    // 2x2 black block in a white 4x4
    // -----------------------------------------------------------
    let mut canvas = rows(&["##..", "##..", "....", "...."]);
    let outcome = flood_fill(&mut canvas, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    rp.show("block", &canvas, LEGEND);
    rp.compare_values(4.0, outcome.pixels_filled() as f64, 0.0);
    rp.compare_canvas(&rows(&["rr..", "rr..", "....", "...."]), &canvas);

    // -----------------------------------------------------------
    // Diagonal black pixels are not 4-connected
    // -----------------------------------------------------------
    let mut canvas = rows(&["#...", "....", "....", "...#"]);
    let outcome = flood_fill(&mut canvas, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    rp.compare_values(1.0, outcome.pixels_filled() as f64, 0.0);
    rp.compare_canvas(&rows(&["r...", "....", "....", "...#"]), &canvas);

    // Touching corners only: still no leak
    let mut canvas = rows(&["#.", ".#"]);
    flood_fill(&mut canvas, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    rp.compare_strings(render_grid(&canvas, LEGEND).as_bytes(), b"r.\n.#");

    // -----------------------------------------------------------
    // Saturated threshold repaints arbitrary colors
    // -----------------------------------------------------------
    let mut canvas = random_color_canvas(16, 12, 0xb1f111);
    canvas.set_rgb(5, 5, Rgb::new(3, 200, 77)).unwrap();
    let outcome = flood_fill(&mut canvas, 5.0, 5.0, 0.0, 0.0, 1.0, 1.0);
    rp.compare_values(192.0, outcome.pixels_filled() as f64, 0.0);
    rp.compare_values(192.0, canvas.count_rgb(Rgb::new(0, 0, 255)) as f64, 0.0);

    // The seed already holds the replacement; everything else still changes
    let mut canvas = random_color_canvas(4, 4, 1);
    canvas.set_rgb(0, 0, Rgb::new(0, 0, 255)).unwrap();
    let outcome = flood_fill(&mut canvas, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0);
    rp.compare_values(16.0, outcome.pixels_filled() as f64, 0.0);
    rp.compare_canvas(&solid_canvas(4, 4, Rgb::new(0, 0, 255)), &canvas);

    // Once the whole canvas matches, a repeat is a no-op
    let outcome = flood_fill(&mut canvas, 2.0, 3.0, 0.0, 0.0, 1.0, 1.0);
    rp.compare_values(1.0, (outcome == FillOutcome::AlreadyFilled) as u8 as f64, 0.0);

    // -----------------------------------------------------------
    // Walls stop the fill; a ring encloses an untouched island
    // -----------------------------------------------------------
    let mut canvas = rows(&[
        "......", //
        ".####.", //
        ".#..#.", //
        ".####.", //
        "......", //
    ]);
    let outcome = flood_fill(&mut canvas, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    rp.show("ring", &canvas, LEGEND);
    rp.compare_values(18.0, outcome.pixels_filled() as f64, 0.0);
    rp.compare_canvas(
        &rows(&[
            "rrrrrr", //
            "r####r", //
            "r#..#r", //
            "r####r", //
            "rrrrrr", //
        ]),
        &canvas,
    );

    assert!(rp.cleanup(), "floodfill regression test failed");
}

#[test_log::test]
fn floodfill_noop_reg() {
    let mut rp = RegParams::new("floodfill_noop");

    // -----------------------------------------------------------
    // Out-of-bounds seeds on every side
    // -----------------------------------------------------------
    let original = rows(&["#..", ".#.", "..#"]);
    let (w, h) = (original.width() as f64, original.height() as f64);
    for (x, y) in [(-1.0, 0.0), (w, 0.0), (0.0, -1.0), (0.0, h), (1e12, -1e12)] {
        let mut canvas = original.clone();
        let outcome = flood_fill(&mut canvas, x, y, 1.0, 0.0, 0.0, 0.0);
        rp.compare_values(1.0, outcome.is_noop() as u8 as f64, 0.0);
        rp.compare_canvas(&original, &canvas);
    }

    // NaN truncates to 0 and lands on the corner
    let mut canvas = original.clone();
    let outcome = flood_fill(&mut canvas, f64::NAN, f64::NAN, 1.0, 0.0, 0.0, 0.0);
    rp.compare_values(1.0, outcome.pixels_filled() as f64, 0.0);

    // -----------------------------------------------------------
    // Idempotence: the second call finds the seed already filled
    // -----------------------------------------------------------
    let mut once = rows(&["##.#", "#..#", "####"]);
    flood_fill(&mut once, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    let mut twice = once.clone();
    let outcome = flood_fill(&mut twice, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    rp.compare_values(1.0, (outcome == FillOutcome::AlreadyFilled) as u8 as f64, 0.0);
    rp.compare_canvas(&once, &twice);

    // -----------------------------------------------------------
    // Seed within threshold of the replacement
    // -----------------------------------------------------------
    let gray = Rgb::new(120, 120, 120);
    let mut canvas = solid_canvas(3, 3, gray);
    let options = FloodFillOptions::new(0.1); // tolerance 25
    let replacement = Color::rgb_hex(140, 100, 130);
    let outcome = flood_fill_with(&mut canvas, 1.0, 1.0, replacement, &options);
    rp.compare_values(1.0, (outcome == FillOutcome::AlreadyFilled) as u8 as f64, 0.0);
    rp.compare_canvas(&solid_canvas(3, 3, gray), &canvas);

    assert!(rp.cleanup(), "floodfill_noop regression test failed");
}

#[test_log::test]
fn floodfill_threshold_reg() {
    let mut rp = RegParams::new("floodfill_threshold");

    // Horizontal gradient 0, 20, 40, ... 140
    let mut canvas = solid_canvas(8, 2, Rgb::BLACK);
    for x in 0..8u32 {
        let v = (x * 20) as u8;
        for y in 0..2 {
            canvas.set_rgb(x, y, Rgb::new(v, v, v)).unwrap();
        }
    }

    // The region is every column within the tolerance of 0
    let cases: [(f64, f64); 4] = [(0.0, 2.0), (20.0 / 255.0, 4.0), (0.3, 8.0), (0.5, 14.0)];
    for (threshold, expected) in cases {
        let mut c = canvas.clone();
        let options = FloodFillOptions::new(threshold).with_quantize(Quantize::Round);
        let outcome = flood_fill_with(&mut c, 0.0, 0.0, Color::rgb(1.0, 0.0, 0.0), &options);
        rp.compare_values(expected, outcome.pixels_filled() as f64, 0.0);
    }

    // Truncating 1/255 can give tolerance 0 while rounding gives 1
    let mut pair = solid_canvas(2, 1, Rgb::BLACK);
    pair.set_rgb(1, 0, Rgb::new(1, 1, 1)).unwrap();
    let mut c = pair.clone();
    let options = FloodFillOptions::new(0.999 / 255.0);
    let outcome = flood_fill_with(&mut c, 0.0, 0.0, Color::rgb(1.0, 0.0, 0.0), &options);
    rp.compare_values(1.0, outcome.pixels_filled() as f64, 0.0);
    let mut c = pair.clone();
    let options = options.with_quantize(Quantize::Round);
    let outcome = flood_fill_with(&mut c, 0.0, 0.0, Color::rgb(1.0, 0.0, 0.0), &options);
    rp.compare_values(2.0, outcome.pixels_filled() as f64, 0.0);

    // Alpha never takes part in matching and is never written
    let mut data = Surface::data(&solid_canvas(2, 1, Rgb::BLACK));
    data[3] = 10;
    data[7] = 200;
    let mut c = Canvas::from_data(2, 1, data).unwrap_or_else(|e| panic!("{}", e));
    flood_fill(&mut c, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    rp.compare_values(10.0, c.get_pixel(0, 0).map_or(0, |p| p.3) as f64, 0.0);
    rp.compare_values(200.0, c.get_pixel(1, 0).map_or(0, |p| p.3) as f64, 0.0);
    rp.compare_values(2.0, c.count_rgb(Rgb::new(0, 255, 0)) as f64, 0.0);

    assert!(rp.cleanup(), "floodfill_threshold regression test failed");
}
