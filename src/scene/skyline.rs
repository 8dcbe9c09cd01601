//! Schematic skyline: fixed building silhouettes with randomly lit windows, plus the sun.

use rand::Rng;

use crate::foundation::core::{Canvas, Point, Rgb8, inclusive_rect};
use crate::scene::plan::{DrawOp, Scene};

pub const WINDOW_AMBER: Rgb8 = Rgb8::new(251, 191, 36);
pub const WINDOW_PALE: Rgb8 = Rgb8::new(200, 200, 100);
pub const SUN_COLOR: Rgb8 = Rgb8::new(251, 191, 36);
pub const SUN_RADIUS: i64 = 60;

pub const WINDOW_PITCH_X: i64 = 15;
pub const WINDOW_PITCH_Y: i64 = 25;
pub const WINDOW_INSET_X: i64 = 4;
pub const WINDOW_INSET_Y: i64 = 8;
/// Inclusive extents, so a window covers `(W + 1) x (H + 1)` pixels.
pub const WINDOW_W: i64 = 8;
pub const WINDOW_H: i64 = 12;
pub const WINDOW_LIT_PROBABILITY: f64 = 0.8;

/// `(x fraction of width, y fraction of height, width px, height px)`.
const LAYOUT: [(f64, f64, i64, i64); 7] = [
    (0.35, 0.35, 80, 280),
    (0.38, 0.30, 100, 360),
    (0.42, 0.32, 75, 320),
    (0.45, 0.36, 90, 270),
    (0.50, 0.34, 85, 300),
    (0.53, 0.28, 110, 400),
    (0.57, 0.36, 80, 280),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Building {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Building {
    pub fn window_rows(self) -> i64 {
        self.h / WINDOW_PITCH_Y
    }

    pub fn window_cols(self) -> i64 {
        self.w / WINDOW_PITCH_X
    }

    /// Top-left pixel of the window at `(row, col)`.
    pub fn window_origin(self, row: i64, col: i64) -> (i64, i64) {
        (
            self.x + col * WINDOW_PITCH_X + WINDOW_INSET_X,
            self.y + row * WINDOW_PITCH_Y + WINDOW_INSET_Y,
        )
    }
}

pub fn buildings(canvas: Canvas) -> Vec<Building> {
    LAYOUT
        .iter()
        .map(|&(fx, fy, w, h)| Building {
            x: canvas.frac_x(fx),
            y: canvas.frac_y(fy),
            w,
            h,
        })
        .collect()
}

fn random_body_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb8 {
    Rgb8::new(
        rng.gen_range(31..=75),
        rng.gen_range(41..=83),
        rng.gen_range(87..=111),
    )
}

/// Paints a building body and its lit windows. One window color is chosen per building.
pub fn push_building<R: Rng + ?Sized>(scene: &mut Scene, building: Building, rng: &mut R) {
    let Building { x, y, w, h } = building;
    scene.fill_rect(inclusive_rect(x, y, x + w, y + h), random_body_color(rng));

    let window_color = if rng.gen_bool(0.5) {
        WINDOW_AMBER
    } else {
        WINDOW_PALE
    };

    for row in 0..building.window_rows() {
        for col in 0..building.window_cols() {
            if !rng.gen_bool(WINDOW_LIT_PROBABILITY) {
                continue;
            }
            let (wx, wy) = building.window_origin(row, col);
            scene.fill_rect(
                inclusive_rect(wx, wy, wx + WINDOW_W, wy + WINDOW_H),
                window_color,
            );
        }
    }
}

pub fn push_skyline<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R) {
    for building in buildings(scene.canvas) {
        push_building(scene, building, rng);
    }
}

pub fn sun_center(canvas: Canvas) -> (i64, i64) {
    (canvas.frac_x(0.85), canvas.frac_y(0.15))
}

/// Disc covering the inclusive box `[cx - R, cx + R] x [cy - R, cy + R]`.
pub fn push_sun(scene: &mut Scene) {
    let (cx, cy) = sun_center(scene.canvas);
    scene.push(DrawOp::FillCircle {
        center: Point::new(cx as f64 + 0.5, cy as f64 + 0.5),
        radius: SUN_RADIUS as f64 + 0.5,
        color: SUN_COLOR,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/scene/skyline.rs"]
mod tests;
