//! Box sizing, text placement and the clip decision
//!
//! Layout is a pure function of the current attributes plus one measurement.
//! Nothing here is cached: every call measures again, so a changed text or
//! font is always picked up on the next draw.

use crate::error::{MetricsError, Result};
use crate::font::FontDescriptor;
use crate::traits::MetricsProvider;
use crate::types::{Align, Alignment, BoxSizeMode, VerticalAlign};

/// What a metrics provider reports for one run of text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Resolved geometry for one draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    /// Measured advance width of the run
    pub text_width: f32,
    /// Nominal text height (integer part of the point size)
    pub text_height: f32,
    pub box_width: f32,
    pub box_height: f32,
    pub padding: f32,
    /// Offset of the run's anchor from the box's top-left corner
    pub dx: f32,
    /// Offset of the run's middle baseline from the box's top-left corner
    pub dy: f32,
    pub should_clip: bool,
}

/// Axis-aligned rectangle in box coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutResult {
    /// The padded content area the run is clipped to when `should_clip` is set
    pub fn clip_rect(&self) -> ClipRect {
        let half = self.padding / 2.0;
        ClipRect {
            x: half,
            y: half,
            width: self.box_width - self.padding,
            height: self.box_height - self.padding,
        }
    }
}

/// Measure `text` in `font`
///
/// Width comes from the provider; height is the point size truncated to an
/// integer, not a glyph-accurate extent. The empty string measures zero wide
/// without asking the provider.
pub fn measure_text(
    metrics: &dyn MetricsProvider,
    text: &str,
    font: &FontDescriptor,
) -> Result<TextMetrics> {
    let height = font.size_pt.trunc();
    if text.is_empty() {
        return Ok(TextMetrics { width: 0.0, height });
    }

    let measured = metrics.measure(&font.to_string(), text)?;
    if !measured.width.is_finite()
        || measured.width < 0.0
        || !measured.height.is_finite()
        || measured.height < 0.0
    {
        return Err(MetricsError::InvalidMeasurement {
            width: measured.width,
            height: measured.height,
        }
        .into());
    }

    Ok(TextMetrics {
        width: measured.width,
        height,
    })
}

/// Resolve box size, text origin and clip decision from a measurement
pub fn layout_from_metrics(
    text: TextMetrics,
    width: BoxSizeMode,
    height: BoxSizeMode,
    padding: f32,
    alignment: Alignment,
) -> LayoutResult {
    let box_width = width.resolve(text.width) + padding;
    let box_height = height.resolve(text.height) + padding;

    let dx = match alignment.horizontal {
        Align::Left => padding / 2.0,
        Align::Center => (box_width - text.width) / 2.0,
        Align::Right => box_width - text.width - padding / 2.0,
    };

    // Top keeps the (padding + height) / 2 offset rather than padding / 2.
    let dy = match alignment.vertical {
        VerticalAlign::Top => (padding + text.height) / 2.0,
        VerticalAlign::Middle => box_height / 2.0,
        VerticalAlign::Bottom => box_height - (padding + text.height) / 2.0,
    };

    // Only the width mode gates clipping, even for height overflow.
    let should_clip = !width.is_auto()
        && (text.width > box_width - padding || text.height > box_height - padding);

    LayoutResult {
        text_width: text.width,
        text_height: text.height,
        box_width,
        box_height,
        padding,
        dx,
        dy,
        should_clip,
    }
}

/// Measure and lay out in one step
pub fn compute_layout(
    metrics: &dyn MetricsProvider,
    text: &str,
    font: &FontDescriptor,
    width: BoxSizeMode,
    height: BoxSizeMode,
    padding: f32,
    alignment: Alignment,
) -> Result<LayoutResult> {
    let measured = measure_text(metrics, text, font)?;
    let layout = layout_from_metrics(measured, width, height, padding, alignment);

    log::trace!(
        "layout via {}: text={}x{}, box={}x{}, origin=({}, {}), clip={}",
        metrics.name(),
        layout.text_width,
        layout.text_height,
        layout.box_width,
        layout.box_height,
        layout.dx,
        layout.dy,
        layout.should_clip
    );

    Ok(layout)
}
