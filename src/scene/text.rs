//! Font resolution and text shaping for the overlay captions.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{PanoError, PanoResult};

/// Where a resolved font came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    Preferred(PathBuf),
    SystemFallback,
}

/// Font bytes plus the face selected within them.
#[derive(Clone)]
pub struct ResolvedFont {
    pub bytes: Arc<Vec<u8>>,
    pub face_index: u32,
    pub family: String,
    pub origin: FontOrigin,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("bytes_len", &self.bytes.len())
            .field("face_index", &self.face_index)
            .field("family", &self.family)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Tries `preferred`, then the system sans-serif face. `None` means no usable font exists.
pub fn resolve_font(preferred: Option<&Path>) -> Option<ResolvedFont> {
    if let Some(path) = preferred {
        match load_font_file(path) {
            Ok(font) => {
                tracing::debug!(family = %font.family, path = %path.display(), "using preferred font");
                return Some(font);
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "preferred font unavailable, falling back");
            }
        }
    }

    match load_system_sans() {
        Ok(font) => {
            tracing::debug!(family = %font.family, "using system fallback font");
            Some(font)
        }
        Err(err) => {
            tracing::warn!(%err, "no usable font found, text overlay will be skipped");
            None
        }
    }
}

/// Loads the first face of a font file (`.ttf`, `.otf` or `.ttc`).
pub fn load_font_file(path: &Path) -> PanoResult<ResolvedFont> {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_file(path)
        .map_err(|e| PanoError::font(format!("read '{}': {e}", path.display())))?;
    let id = db
        .faces()
        .next()
        .map(|f| f.id)
        .ok_or_else(|| PanoError::font(format!("'{}' contains no font faces", path.display())))?;
    face_from_db(&db, id, FontOrigin::Preferred(path.to_path_buf()))
}

/// Named sans-serif families tried before the generic `SansSerif` query.
const SANS_FAMILIES: &[&str] = &[
    "Helvetica",
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
];

/// Whether a family name looks like a plain sans-serif text face.
pub fn is_sans_family_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.contains("sans") && !lower.contains("mono") && is_text_family_name(name)
}

/// Rejects math, symbol, emoji and dingbat faces, which cannot set captions.
pub fn is_text_family_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    !["math", "symbol", "emoji", "dingbat"]
        .iter()
        .any(|k| lower.contains(k))
}

pub fn load_system_sans() -> PanoResult<ResolvedFont> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    let mut families: Vec<usvg::fontdb::Family<'_>> = SANS_FAMILIES
        .iter()
        .map(|&name| usvg::fontdb::Family::Name(name))
        .collect();
    families.push(usvg::fontdb::Family::SansSerif);
    let query = usvg::fontdb::Query {
        families: &families,
        ..usvg::fontdb::Query::default()
    };

    let id = db
        .query(&query)
        .or_else(|| discover_face(&db, is_sans_family_name))
        .or_else(|| discover_face(&db, is_text_family_name))
        .ok_or_else(|| PanoError::font("no usable system text font installed"))?;
    face_from_db(&db, id, FontOrigin::SystemFallback)
}

/// First upright face whose primary family satisfies `accept`, preferring regular weight.
fn discover_face(
    db: &usvg::fontdb::Database,
    accept: fn(&str) -> bool,
) -> Option<usvg::fontdb::ID> {
    db.faces()
        .filter(|f| !f.monospaced && f.style == usvg::fontdb::Style::Normal)
        .filter(|f| f.families.first().is_some_and(|(name, _)| accept(name)))
        .min_by_key(|f| f.weight.0.abs_diff(usvg::fontdb::Weight::NORMAL.0))
        .map(|f| f.id)
}

fn face_from_db(
    db: &usvg::fontdb::Database,
    id: usvg::fontdb::ID,
    origin: FontOrigin,
) -> PanoResult<ResolvedFont> {
    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_default();
    let (bytes, face_index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| PanoError::font("font face data could not be read"))?;

    Ok(ResolvedFont {
        bytes: Arc::new(bytes),
        face_index,
        family,
        origin,
    })
}

/// A shaped single-line caption and the font bytes its glyph ids refer to.
#[derive(Clone)]
pub struct PreparedText {
    pub layout: Arc<parley::Layout<Rgb8>>,
    pub font_bytes: Arc<Vec<u8>>,
    pub size_px: f32,
}

impl PreparedText {
    pub fn width(&self) -> f32 {
        self.layout.width()
    }
}

impl std::fmt::Debug for PreparedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedText")
            .field("layout_ptr", &Arc::as_ptr(&self.layout))
            .field("font_bytes_len", &self.font_bytes.len())
            .field("size_px", &self.size_px)
            .finish()
    }
}

/// Parley contexts with one resolved font registered.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
    font_bytes: Arc<Vec<u8>>,
    family_name: String,
}

impl TextLayoutEngine {
    pub fn new(font: &ResolvedFont) -> PanoResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.as_ref().clone()), None);

        let names: Vec<String> = families
            .iter()
            .filter_map(|(id, _)| font_ctx.collection.family_name(*id).map(str::to_string))
            .collect();
        // A collection may register several families; prefer the one fontdb picked.
        let family_name = names
            .iter()
            .find(|n| **n == font.family)
            .or_else(|| names.first())
            .cloned()
            .ok_or_else(|| PanoError::font("no font families registered from font bytes"))?;

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font_bytes: Arc::clone(&font.bytes),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn layout_line(&mut self, text: &str, size_px: f32) -> PanoResult<PreparedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PanoError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(Rgb8::WHITE));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(PreparedText {
            layout: Arc::new(layout),
            font_bytes: Arc::clone(&self.font_bytes),
            size_px,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/text.rs"]
mod tests;
