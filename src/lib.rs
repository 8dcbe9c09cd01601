//! Procedural placeholder panorama generator.
//!
//! Produces a stand-in equirectangular (2:1) image for panorama viewer development: a
//! sky/ground gradient backdrop, a schematic skyline with randomly lit windows, a sun disc and
//! two drop-shadowed captions.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `PlaceholderConfig + Rng + font -> Scene` (an ordered list of `DrawOp`s)
//! 2. **Render**: `Scene -> RgbImage` (CPU rasterizer)
//! 3. **Encode**: `RgbImage -> JPEG`
//!
//! [`generate_placeholder_panorama`] runs steps 1 and 2; [`write_jpeg`] handles step 3.
#![forbid(unsafe_code)]

pub mod config;
mod encode;
mod foundation;
mod generate;
mod render;
mod scene;

pub use config::PlaceholderConfig;
pub use encode::jpeg::{encode_jpeg, encode_jpeg_to_vec, ensure_parent_dir, write_jpeg};
pub use foundation::core::{Canvas, MAX_CANVAS_EDGE, Point, Rect, Rgb8, inclusive_rect};
pub use foundation::error::{PanoError, PanoResult};
pub use generate::{GeneratedPanorama, generate_placeholder_panorama, generate_with};
pub use render::cpu::{CpuRasterizer, render_scene};
pub use scene::compose::compose_scene;
pub use scene::gradient::{WATER_FRACTION, ground_color, row_color, sky_color};
pub use scene::overlay::{SHADOW_OFFSET_PX, SUBTITLE_SIZE_PX, TITLE_SIZE_PX, caption_origin};
pub use scene::plan::{DrawOp, Scene};
pub use scene::skyline::{
    Building, SUN_COLOR, SUN_RADIUS, WINDOW_AMBER, WINDOW_PALE, buildings, sun_center,
};
pub use scene::text::{
    FontOrigin, PreparedText, ResolvedFont, TextLayoutEngine, load_font_file, load_system_sans,
    resolve_font,
};
