//! Font descriptors: the `"<style> <size>pt <family>"` strings shared by
//! measurement and painting

use crate::error::{MetricsError, Result};
use crate::types::FontStyle;
use std::fmt;

/// CSS pixels per typographic point
pub const PX_PER_PT: f32 = 96.0 / 72.0;

/// A parsed font descriptor
///
/// `Display` produces exactly the string handed to metrics providers and
/// surfaces, so `FontDescriptor::parse(&d.to_string())` gives `d` back.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub style: FontStyle,
    pub size_pt: f32,
    pub family: String,
}

impl FontDescriptor {
    pub fn new(style: FontStyle, size_pt: f32, family: impl Into<String>) -> Self {
        Self {
            style,
            size_pt,
            family: family.into(),
        }
    }

    /// Nominal size in CSS pixels, which is what backends rasterize at
    pub fn size_px(&self) -> f32 {
        self.size_pt * PX_PER_PT
    }

    /// Parse a descriptor; the family may contain spaces
    ///
    /// A `px` size is accepted as well and converted to points.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let invalid = || MetricsError::InvalidDescriptor(descriptor.to_string());

        let mut parts = descriptor.trim().splitn(3, char::is_whitespace);
        let style = parts
            .next()
            .and_then(|s| s.parse::<FontStyle>().ok())
            .ok_or_else(invalid)?;
        let size = parts.next().ok_or_else(invalid)?;
        let family = parts.next().map(str::trim).unwrap_or_default();
        if family.is_empty() {
            return Err(invalid().into());
        }

        let parsed = if let Some(pt) = size.strip_suffix("pt") {
            pt.parse::<f32>().ok()
        } else if let Some(px) = size.strip_suffix("px") {
            px.parse::<f32>().ok().map(|px| px / PX_PER_PT)
        } else {
            None
        };
        let size_pt = parsed
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(invalid)?;

        Ok(Self::new(style, size_pt, family))
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt {}", self.style, self.size_pt, self.family)
    }
}
