use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{PanoError, PanoResult};

pub const DEFAULT_WIDTH: u32 = 4096;
pub const DEFAULT_HEIGHT: u32 = 2048;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;
pub const DEFAULT_TITLE: &str = "AUSTIN SKYLINE";
pub const DEFAULT_SUBTITLE: &str = "Placeholder - Replace with Real Panorama";
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Everything that parameterizes one generated placeholder.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    pub width: u32,
    pub height: u32,
    /// Seed for building/window randomness. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub title: String,
    pub subtitle: String,
    /// Preferred font file; the system sans-serif face is used when it cannot be loaded.
    pub font_path: Option<PathBuf>,
    pub jpeg_quality: u8,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            font_path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PlaceholderConfig {
    pub fn from_json_str(s: &str) -> PanoResult<Self> {
        serde_json::from_str(s).map_err(|e| PanoError::validation(format!("config JSON: {e}")))
    }

    pub fn from_json_file(path: &Path) -> PanoResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn canvas(&self) -> PanoResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    pub fn validate(&self) -> PanoResult<()> {
        self.canvas()?;
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PanoError::validation(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
