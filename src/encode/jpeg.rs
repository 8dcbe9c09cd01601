use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{PanoError, PanoResult};

pub fn ensure_parent_dir(path: &Path) -> PanoResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn check_quality(quality: u8) -> PanoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(PanoError::validation(format!(
            "jpeg quality must be in 1..=100, got {quality}"
        )));
    }
    Ok(())
}

pub fn encode_jpeg<W: std::io::Write>(
    img: &image::RgbImage,
    out: W,
    quality: u8,
) -> PanoResult<()> {
    check_quality(quality)?;
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(out, quality);
    encoder
        .encode_image(img)
        .map_err(|e| PanoError::encode(format!("jpeg: {e}")))
}

pub fn encode_jpeg_to_vec(img: &image::RgbImage, quality: u8) -> PanoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_jpeg(img, &mut bytes, quality)?;
    Ok(bytes)
}

/// Writes `img` as a baseline JPEG, creating parent directories as needed.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn write_jpeg(img: &image::RgbImage, path: &Path, quality: u8) -> PanoResult<()> {
    check_quality(quality)?;
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    encode_jpeg(img, &mut w, quality)?;
    std::io::Write::flush(&mut w).with_context(|| format!("flush '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "wrote jpeg");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jpeg.rs"]
mod tests;
