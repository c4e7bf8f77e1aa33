//! Font loading and lookup by family
//!
//! A [`Font`] keeps its raw bytes and parses them on demand, so loaded fonts
//! can be shared freely between the surface and the metrics provider.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::instance::{LocationRef, Size};
use skrifa::MetadataProvider;
use textbox_core::types::FontStyle;
use thiserror::Error;

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,
}

/// Vertical metrics at one pixel size, y-up (descent is negative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// A font held in memory
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl Font {
    /// Load the first face of a font file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        Self::from_file_index(path, 0)
    }

    /// Load one face of a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self, FontLoadError> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontLoadError::FileNotFound(path.as_ref().display().to_string()))?;
        Self::from_data_index(data, face_index)
    }

    pub fn from_data(data: Vec<u8>) -> Result<Self, FontLoadError> {
        Self::from_data_index(data, 0)
    }

    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self, FontLoadError> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;
        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Self {
            data,
            face_index,
            units_per_em,
        })
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub(crate) fn font_ref(&self) -> Option<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Glyph that draws `ch`, if the font maps it
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()?.charmap().map(ch).map(|gid| gid.to_u32())
    }

    /// Horizontal advance of `glyph_id` in pixels at `size_px`
    pub fn advance(&self, glyph_id: u32, size_px: f32) -> f32 {
        self.font_ref()
            .and_then(|font| {
                font.glyph_metrics(Size::new(size_px), LocationRef::default())
                    .advance_width(skrifa::GlyphId::new(glyph_id))
            })
            .unwrap_or(0.0)
    }

    /// Ascent and descent in pixels at `size_px`
    pub fn vertical_metrics(&self, size_px: f32) -> VerticalMetrics {
        match self.font_ref() {
            Some(font) => {
                let m = font.metrics(Size::new(size_px), LocationRef::default());
                VerticalMetrics {
                    ascent: m.ascent,
                    descent: m.descent,
                }
            },
            None => VerticalMetrics {
                ascent: size_px * 0.8,
                descent: -size_px * 0.2,
            },
        }
    }

    /// Total advance of `text` in pixels; unmapped characters use glyph 0
    pub fn text_advance(&self, text: &str, size_px: f32) -> f32 {
        text.chars()
            .map(|ch| self.advance(self.glyph_id(ch).unwrap_or(0), size_px))
            .sum()
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("bytes", &self.data.len())
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

/// Fonts registered by family name and style
///
/// Family names are matched case-insensitively. A lookup for a style that was
/// never registered falls back to the family's normal face.
#[derive(Debug, Default)]
pub struct FontBook {
    faces: HashMap<(String, FontStyle), Arc<Font>>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `font` as the normal face of `family`
    pub fn insert(&mut self, family: &str, font: Font) {
        self.insert_style(family, FontStyle::Normal, font);
    }

    pub fn insert_style(&mut self, family: &str, style: FontStyle, font: Font) {
        log::debug!("FontBook: registered {} ({})", family, style);
        self.faces
            .insert((family.to_lowercase(), style), Arc::new(font));
    }

    /// Load a font file and register it as the normal face of `family`
    pub fn load_file(&mut self, family: &str, path: impl AsRef<Path>) -> Result<(), FontLoadError> {
        let font = Font::from_file(path)?;
        self.insert(family, font);
        Ok(())
    }

    pub fn lookup(&self, family: &str, style: FontStyle) -> Option<Arc<Font>> {
        let family = family.to_lowercase();
        self.faces
            .get(&(family.clone(), style))
            .or_else(|| self.faces.get(&(family, FontStyle::Normal)))
            .cloned()
    }

    pub fn contains(&self, family: &str) -> bool {
        let family = family.to_lowercase();
        self.faces.keys().any(|(name, _)| *name == family)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
