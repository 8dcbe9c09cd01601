use std::sync::Arc;

use crate::foundation::core::{Canvas, Point, Rgb8};
use crate::foundation::error::PanoResult;
use crate::scene::plan::{DrawOp, Scene};
use crate::scene::text::{PreparedText, TextLayoutEngine};

pub const TITLE_SIZE_PX: f32 = 100.0;
pub const SUBTITLE_SIZE_PX: f32 = 60.0;
pub const SHADOW_OFFSET_PX: i64 = 4;
pub const TITLE_Y_FRAC: f64 = 0.20;
pub const SUBTITLE_Y_FRAC: f64 = 0.25;

/// Top-left of a caption of `text_width` horizontally centered on the canvas.
pub fn caption_origin(canvas: Canvas, text_width: f32, y_frac: f64) -> (i64, i64) {
    let x = (i64::from(canvas.width) - text_width as i64).div_euclid(2);
    (x, canvas.frac_y(y_frac))
}

/// Black copy offset down-right, then the white caption on top.
pub fn push_shadowed_caption(scene: &mut Scene, text: PreparedText, y_frac: f64) {
    let (x, y) = caption_origin(scene.canvas, text.width(), y_frac);
    let text = Arc::new(text);
    scene.push(DrawOp::Text {
        text: Arc::clone(&text),
        origin: Point::new(
            (x + SHADOW_OFFSET_PX) as f64,
            (y + SHADOW_OFFSET_PX) as f64,
        ),
        color: Rgb8::BLACK,
    });
    scene.push(DrawOp::Text {
        text,
        origin: Point::new(x as f64, y as f64),
        color: Rgb8::WHITE,
    });
}

pub fn push_captions(
    scene: &mut Scene,
    engine: &mut TextLayoutEngine,
    title: &str,
    subtitle: &str,
) -> PanoResult<()> {
    let title = engine.layout_line(title, TITLE_SIZE_PX)?;
    let subtitle = engine.layout_line(subtitle, SUBTITLE_SIZE_PX)?;
    push_shadowed_caption(scene, title, TITLE_Y_FRAC);
    push_shadowed_caption(scene, subtitle, SUBTITLE_Y_FRAC);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/overlay.rs"]
mod tests;
