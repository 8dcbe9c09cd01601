use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::PlaceholderConfig,
    foundation::error::PanoResult,
    render::cpu::render_scene,
    scene::compose::compose_scene,
    scene::text::{ResolvedFont, resolve_font},
};

/// A generated placeholder and what was used to make it.
#[derive(Debug)]
pub struct GeneratedPanorama {
    pub image: image::RgbImage,
    /// `None` when no font could be loaded and the captions were skipped.
    pub font: Option<ResolvedFont>,
}

/// Generates the placeholder panorama described by `config`.
///
/// Resolves the caption font (preferred path, then system fallback), seeds the
/// randomness from `config.seed` or OS entropy, composes and rasterizes the scene.
#[tracing::instrument(skip(config), fields(width = config.width, height = config.height, seed = ?config.seed))]
pub fn generate_placeholder_panorama(config: &PlaceholderConfig) -> PanoResult<GeneratedPanorama> {
    config.validate()?;
    let font = resolve_font(config.font_path.as_deref());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let image = generate_with(config, font.as_ref(), &mut rng)?;
    Ok(GeneratedPanorama { image, font })
}

/// Lower-level entry: caller supplies the font (or none) and the randomness source.
pub fn generate_with<R: Rng + ?Sized>(
    config: &PlaceholderConfig,
    font: Option<&ResolvedFont>,
    rng: &mut R,
) -> PanoResult<image::RgbImage> {
    let scene = compose_scene(config, font, rng)?;
    render_scene(&scene)
}
