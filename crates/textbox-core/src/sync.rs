//! One-way propagation of composite attributes onto the child drawables
//!
//! Fan-out order is fixed: the box first, then the glyph run. Each child is
//! overwritten field by field (last write wins), so running a sync twice on
//! unchanged attributes leaves the children exactly as the first run did.

use crate::config::TextAttrs;
use crate::layout::LayoutResult;
use crate::shapes::{BoxShape, GlyphShape};

/// Every attribute a text element exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    FontFamily,
    FontSize,
    FontStyle,
    TextFill,
    TextStroke,
    TextStrokeWidth,
    Padding,
    Align,
    VerticalAlign,
    Text,
    Width,
    Height,
    CornerRadius,
    Fill,
    Stroke,
    StrokeWidth,
    Shadow,
    HitDetection,
}

impl Attribute {
    /// Attributes whose change must reach the children before the next draw
    ///
    /// Beyond the mirrored fields this includes everything the box size is
    /// measured from, so the box never keeps a stale width or height.
    pub fn triggers_sync(self) -> bool {
        !matches!(self, Attribute::Align | Attribute::VerticalAlign)
    }
}

/// Push the current attributes and box size into both children
pub fn sync_children(
    attrs: &TextAttrs,
    layout: &LayoutResult,
    box_shape: &mut BoxShape,
    glyph: &mut GlyphShape,
) {
    mirror_attrs(attrs, box_shape, glyph);
    apply_box_size(layout, box_shape);
}

/// Copy every mirrored attribute that does not depend on measurement
///
/// Runs even when the text cannot be measured, so colours, shadow and hit
/// detection never lag behind the element.
pub fn mirror_attrs(attrs: &TextAttrs, box_shape: &mut BoxShape, glyph: &mut GlyphShape) {
    box_shape.corner_radius = attrs.corner_radius;
    box_shape.stroke = attrs.stroke;
    box_shape.stroke_width = attrs.stroke_width;
    box_shape.fill = attrs.fill;
    box_shape.shadow = attrs.shadow;
    box_shape.hit_detection = attrs.hit_detection;

    glyph.text_fill = attrs.text_fill;
    glyph.text_stroke = attrs.text_stroke;
    glyph.text_stroke_width = attrs.text_stroke_width;
    glyph.shadow = attrs.shadow;
    glyph.hit_detection = attrs.hit_detection;
}

/// Size the box from a successful layout
pub fn apply_box_size(layout: &LayoutResult, box_shape: &mut BoxShape) {
    box_shape.width = layout.box_width;
    box_shape.height = layout.box_height;

    log::trace!(
        "synced children: box {}x{}, radius {}",
        layout.box_width,
        layout.box_height,
        box_shape.corner_radius
    );
}
