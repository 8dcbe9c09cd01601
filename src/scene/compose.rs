use rand::Rng;

use crate::config::PlaceholderConfig;
use crate::foundation::error::PanoResult;
use crate::scene::{
    gradient,
    overlay,
    plan::Scene,
    skyline,
    text::{ResolvedFont, TextLayoutEngine},
};

/// Builds the full placeholder draw list: backdrop, skyline, sun, then captions.
///
/// Captions are omitted when `font` is `None`; everything else is always present.
#[tracing::instrument(skip(config, font, rng), fields(width = config.width, height = config.height))]
pub fn compose_scene<R: Rng + ?Sized>(
    config: &PlaceholderConfig,
    font: Option<&ResolvedFont>,
    rng: &mut R,
) -> PanoResult<Scene> {
    let mut scene = Scene::new(config.canvas()?);

    gradient::push_backdrop(&mut scene);
    skyline::push_skyline(&mut scene, rng);
    skyline::push_sun(&mut scene);

    if let Some(font) = font {
        let mut engine = TextLayoutEngine::new(font)?;
        overlay::push_captions(&mut scene, &mut engine, &config.title, &config.subtitle)?;
    }

    tracing::debug!(ops = scene.ops.len(), "composed scene");
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
