use std::sync::Arc;

use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::scene::text::PreparedText;

/// One paint operation. Ops are painted in order, later ops over earlier ones.
#[derive(Clone, Debug)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb8,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgb8,
    },
    /// `origin` is the top-left of the layout box; the layout brush is ignored in favor of `color`.
    Text {
        text: Arc<PreparedText>,
        origin: Point,
        color: Rgb8,
    },
}

/// A fully composed frame, ready for a rasterizer.
#[derive(Clone, Debug)]
pub struct Scene {
    pub canvas: Canvas,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb8) {
        self.push(DrawOp::FillRect { rect, color });
    }

    #[cfg(test)]
    pub(crate) fn text_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
    }
}
