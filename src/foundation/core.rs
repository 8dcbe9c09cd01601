use crate::foundation::error::{PanoError, PanoResult};

pub use kurbo::{Point, Rect};

/// Largest edge the CPU rasterizer accepts for a single surface.
pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> PanoResult<Self> {
        if width == 0 {
            return Err(PanoError::validation("canvas width must be > 0"));
        }
        // The ground gradient is normalized by height / 2.
        if height < 2 {
            return Err(PanoError::validation("canvas height must be >= 2"));
        }
        if width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
            return Err(PanoError::validation(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_EDGE}px per edge"
            )));
        }
        Ok(Self { width, height })
    }

    /// Row where the sky ends and the ground begins.
    pub fn horizon(self) -> u32 {
        self.height / 2
    }

    /// `int(width * f)`.
    pub fn frac_x(self, f: f64) -> i64 {
        (f64::from(self.width) * f) as i64
    }

    /// `int(height * f)`.
    pub fn frac_y(self, f: f64) -> i64 {
        (f64::from(self.height) * f) as i64
    }

    pub fn full_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Opaque 8-bit RGB color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Truncates each channel toward zero; out-of-range values saturate.
    pub fn from_f64_trunc(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Pixel-inclusive box `[x0, x1] x [y0, y1]` as a half-open rect covering the same pixels.
pub fn inclusive_rect(x0: i64, y0: i64, x1: i64, y1: i64) -> Rect {
    Rect::new(x0 as f64, y0 as f64, (x1 + 1) as f64, (y1 + 1) as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
