use std::{collections::HashMap, sync::Arc};

use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Canvas, Point, Rect, Rgb8},
    foundation::error::{PanoError, PanoResult},
    scene::plan::{DrawOp, Scene},
    scene::text::PreparedText,
};

/// Rasterizes [`Scene`]s with `vello_cpu`, caching font handles across text ops.
#[derive(Default)]
pub struct CpuRasterizer {
    font_cache: HashMap<(usize, u32), vello_cpu::peniko::FontData>,
}

impl CpuRasterizer {
    #[tracing::instrument(skip(self, scene), fields(width = scene.canvas.width, height = scene.canvas.height))]
    pub fn render(&mut self, scene: &Scene) -> PanoResult<image::RgbImage> {
        let (width, height) = surface_size(scene.canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        // Opaque base so the output never carries unset pixels.
        ctx.set_paint(color_to_cpu(Rgb8::BLACK));
        ctx.fill_rect(&rect_to_cpu(scene.canvas.full_rect()));

        for op in &scene.ops {
            self.draw_op(&mut ctx, op);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        pixmap_to_rgb(&pixmap, scene.canvas)
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect { rect, color } => {
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_rect(&rect_to_cpu(*rect));
            }
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_paint(color_to_cpu(*color));
                let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), *radius);
                ctx.fill_path(&circle.to_path(0.1));
            }
            DrawOp::Text {
                text,
                origin,
                color,
            } => {
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                ctx.set_paint(color_to_cpu(*color));
                self.draw_text(ctx, text);
            }
        }
    }

    fn draw_text(&mut self, ctx: &mut vello_cpu::RenderContext, text: &PreparedText) {
        for line in text.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let font = self.font_for(text, run.run().font().index);
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    fn font_for(&mut self, text: &PreparedText, index: u32) -> vello_cpu::peniko::FontData {
        let key = (Arc::as_ptr(&text.font_bytes) as usize, index);
        self.font_cache
            .entry(key)
            .or_insert_with(|| {
                let bytes = text.font_bytes.as_ref().clone();
                vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index)
            })
            .clone()
    }
}

/// One-shot convenience over [`CpuRasterizer`].
pub fn render_scene(scene: &Scene) -> PanoResult<image::RgbImage> {
    CpuRasterizer::default().render(scene)
}

fn surface_size(canvas: Canvas) -> PanoResult<(u16, u16)> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| PanoError::render("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| PanoError::render("surface height exceeds u16"))?;
    Ok((width, height))
}

/// Drops alpha from premultiplied RGBA8, which equals compositing over black.
fn pixmap_to_rgb(pixmap: &vello_cpu::Pixmap, canvas: Canvas) -> PanoResult<image::RgbImage> {
    let rgba = pixmap.data_as_u8_slice();
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    image::RgbImage::from_raw(canvas.width, canvas.height, rgb)
        .ok_or_else(|| PanoError::render("pixmap size does not match canvas"))
}

fn color_to_cpu(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
