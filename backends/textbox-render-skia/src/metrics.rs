//! Text measurement from real font advances

use std::sync::Arc;

use textbox_core::{error::MetricsError, FontDescriptor, MetricsProvider, TextMetrics};

use crate::fonts::FontBook;

/// Measures text with the same fonts a [`crate::SkiaSurface`] paints with
#[derive(Debug, Clone)]
pub struct SkiaMetrics {
    book: Arc<FontBook>,
}

impl SkiaMetrics {
    pub fn new(book: Arc<FontBook>) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &Arc<FontBook> {
        &self.book
    }
}

impl MetricsProvider for SkiaMetrics {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn measure(&self, font: &str, text: &str) -> Result<TextMetrics, MetricsError> {
        let descriptor = FontDescriptor::parse(font)
            .map_err(|_| MetricsError::InvalidDescriptor(font.to_string()))?;
        let face = self
            .book
            .lookup(&descriptor.family, descriptor.style)
            .ok_or_else(|| MetricsError::FontNotFound(descriptor.family.clone()))?;

        let size = descriptor.size_px();
        let width = face.text_advance(text, size);
        log::debug!("SkiaMetrics: {:?} at {}px is {} wide", text, size, width);

        Ok(TextMetrics {
            width,
            height: size,
        })
    }
}
