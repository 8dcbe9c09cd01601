//! Backdrop gradients: a sky over the upper half and a water/grass band over the lower half.

use crate::foundation::core::{Canvas, Rect, Rgb8};
use crate::scene::plan::Scene;

/// Fraction of the ground half, measured down from the horizon, that is water.
pub const WATER_FRACTION: f64 = 0.3;

pub fn sky_color(canvas: Canvas, y: u32) -> Rgb8 {
    let ratio = f64::from(y) / f64::from(canvas.horizon());
    Rgb8::from_f64_trunc(
        30.0 + ratio * 66.0,
        58.0 + ratio * 72.0,
        138.0 + ratio * 112.0,
    )
}

pub fn ground_color(canvas: Canvas, y: u32) -> Rgb8 {
    let horizon = canvas.horizon();
    let ratio = f64::from(y.saturating_sub(horizon)) / f64::from(horizon);
    if ratio < WATER_FRACTION {
        Rgb8::from_f64_trunc(
            5.0 + ratio * 11.0,
            150.0 + ratio * 35.0,
            105.0 - ratio * 24.0,
        )
    } else {
        Rgb8::from_f64_trunc(6.0, 95.0 + ratio * 90.0, 46.0 + ratio * 24.0)
    }
}

/// Backdrop color of row `y`.
pub fn row_color(canvas: Canvas, y: u32) -> Rgb8 {
    if y < canvas.horizon() {
        sky_color(canvas, y)
    } else {
        ground_color(canvas, y)
    }
}

/// Emits full-width bands covering every row, merging consecutive rows of equal color.
pub fn push_backdrop(scene: &mut Scene) {
    let canvas = scene.canvas;
    let width = f64::from(canvas.width);

    let mut band_start = 0u32;
    let mut band_color = row_color(canvas, 0);
    for y in 1..=canvas.height {
        let color = (y < canvas.height).then(|| row_color(canvas, y));
        if color == Some(band_color) {
            continue;
        }
        scene.fill_rect(
            Rect::new(0.0, f64::from(band_start), width, f64::from(y)),
            band_color,
        );
        if let Some(c) = color {
            band_start = y;
            band_color = c;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/gradient.rs"]
mod tests;
