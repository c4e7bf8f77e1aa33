//! None Metrics - Width from character count alone
//!
//! The most basic provider: no font files, no shaping. Every character
//! advances by the same fraction of an em, which is enough for layout
//! previews, tests and headless hosts.

use textbox_core::{error::MetricsError, FontDescriptor, MetricsProvider, TextMetrics};

/// Average advance of a Latin glyph, in ems
pub const DEFAULT_EM_RATIO: f32 = 0.6;

/// A minimal provider that only counts characters
pub struct NoneMetrics {
    em_ratio: f32,
}

impl NoneMetrics {
    /// Create a provider with the default em ratio
    pub fn new() -> Self {
        Self::with_em_ratio(DEFAULT_EM_RATIO)
    }

    /// Create a provider where every character is `em_ratio` ems wide
    pub fn with_em_ratio(em_ratio: f32) -> Self {
        Self {
            em_ratio: em_ratio.max(0.0),
        }
    }

    pub fn em_ratio(&self) -> f32 {
        self.em_ratio
    }
}

impl Default for NoneMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for NoneMetrics {
    fn name(&self) -> &'static str {
        "none"
    }

    fn measure(&self, font: &str, text: &str) -> Result<TextMetrics, MetricsError> {
        let descriptor = FontDescriptor::parse(font)
            .map_err(|_| MetricsError::InvalidDescriptor(font.to_string()))?;
        let size = descriptor.size_px();
        let chars = text.chars().count();

        log::debug!("NoneMetrics: measuring {} chars at {}px", chars, size);

        Ok(TextMetrics {
            width: chars as f32 * size * self.em_ratio,
            height: size,
        })
    }
}
