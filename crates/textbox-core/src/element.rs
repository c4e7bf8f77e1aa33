//! The composite text element

use crate::config::{TextAttrs, TextConfig};
use crate::error::Result;
use crate::font::FontDescriptor;
use crate::layout::{self, LayoutResult, TextMetrics};
use crate::render;
use crate::shapes::{BoxShape, GlyphShape};
use crate::sync::{self, Attribute};
use crate::traits::{MetricsProvider, Surface};
use crate::types::{Align, BoxSizeMode, Color, FontStyle, HitDetection, Shadow, VerticalAlign};
use std::sync::Arc;

/// A box with a single run of text in it
///
/// The element owns its background [`BoxShape`] and its [`GlyphShape`] for
/// its whole lifetime. Children are never replaced, only re-synced: once at
/// construction and again from every setter whose attribute reaches them
/// (see [`Attribute::triggers_sync`]). Setters therefore return `Result`,
/// since syncing measures the text to size the box.
pub struct TextElement {
    attrs: TextAttrs,
    box_shape: BoxShape,
    glyph: GlyphShape,
    metrics: Arc<dyn MetricsProvider>,
}

impl TextElement {
    /// Merge `config` over the defaults and sync both children
    pub fn new(config: TextConfig, metrics: Arc<dyn MetricsProvider>) -> Result<Self> {
        let mut element = Self {
            attrs: TextAttrs::from_config(config),
            box_shape: BoxShape::default(),
            glyph: GlyphShape::default(),
            metrics,
        };
        element.sync_children()?;
        Ok(element)
    }

    pub fn attrs(&self) -> &TextAttrs {
        &self.attrs
    }

    pub fn box_shape(&self) -> &BoxShape {
        &self.box_shape
    }

    pub fn glyph_shape(&self) -> &GlyphShape {
        &self.glyph
    }

    pub fn metrics(&self) -> &Arc<dyn MetricsProvider> {
        &self.metrics
    }

    pub fn font_descriptor(&self) -> FontDescriptor {
        self.attrs.font_descriptor()
    }

    /// Lay out the current attributes, measuring afresh
    pub fn layout(&self) -> Result<LayoutResult> {
        layout::compute_layout(
            self.metrics.as_ref(),
            &self.attrs.text,
            &self.font_descriptor(),
            self.attrs.width,
            self.attrs.height,
            self.attrs.padding,
            self.attrs.alignment(),
        )
    }

    pub fn text_size(&self) -> Result<TextMetrics> {
        layout::measure_text(
            self.metrics.as_ref(),
            &self.attrs.text,
            &self.font_descriptor(),
        )
    }

    pub fn text_width(&self) -> Result<f32> {
        Ok(self.text_size()?.width)
    }

    pub fn text_height(&self) -> Result<f32> {
        Ok(self.text_size()?.height)
    }

    pub fn box_width(&self) -> Result<f32> {
        Ok(self.layout()?.box_width)
    }

    pub fn box_height(&self) -> Result<f32> {
        Ok(self.layout()?.box_height)
    }

    /// Re-mirror attributes and box size onto both children
    ///
    /// Attributes are mirrored before measuring, so a failed measurement only
    /// leaves the box size stale.
    pub fn sync_children(&mut self) -> Result<()> {
        sync::mirror_attrs(&self.attrs, &mut self.box_shape, &mut self.glyph);
        let layout = self.layout()?;
        sync::apply_box_size(&layout, &mut self.box_shape);
        Ok(())
    }

    /// Merge a partial config over the current attributes, then sync once
    pub fn set_attrs(&mut self, config: TextConfig) -> Result<()> {
        config.apply_to(&mut self.attrs);
        self.sync_children()
    }

    /// Paint the box, then the text run, with a layout computed for this draw
    ///
    /// The surface's graphics state is left as it was found. Returns the
    /// layout that was painted.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<LayoutResult> {
        let layout = self.layout()?;
        sync::sync_children(&self.attrs, &layout, &mut self.box_shape, &mut self.glyph);

        let mut shadow_applied = self.box_shape.draw(surface)?;
        render::draw_glyph_run(
            surface,
            &self.attrs,
            &layout,
            &self.glyph,
            &mut shadow_applied,
        )?;

        log::debug!(
            "drew text box {}x{} ({} chars, clip={})",
            layout.box_width,
            layout.box_height,
            self.attrs.text.chars().count(),
            layout.should_clip
        );
        Ok(layout)
    }

    fn changed(&mut self, attr: Attribute) -> Result<()> {
        if attr.triggers_sync() {
            self.sync_children()
        } else {
            Ok(())
        }
    }

    // Accessors

    pub fn font_family(&self) -> &str {
        &self.attrs.font_family
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> Result<()> {
        self.attrs.font_family = family.into();
        self.changed(Attribute::FontFamily)
    }

    pub fn font_size(&self) -> f32 {
        self.attrs.font_size
    }

    pub fn set_font_size(&mut self, size: f32) -> Result<()> {
        self.attrs.font_size = size;
        self.changed(Attribute::FontSize)
    }

    pub fn font_style(&self) -> FontStyle {
        self.attrs.font_style
    }

    pub fn set_font_style(&mut self, style: FontStyle) -> Result<()> {
        self.attrs.font_style = style;
        self.changed(Attribute::FontStyle)
    }

    pub fn text_fill(&self) -> Option<Color> {
        self.attrs.text_fill
    }

    pub fn set_text_fill(&mut self, color: Option<Color>) -> Result<()> {
        self.attrs.text_fill = color;
        self.changed(Attribute::TextFill)
    }

    pub fn text_stroke(&self) -> Option<Color> {
        self.attrs.text_stroke
    }

    pub fn set_text_stroke(&mut self, color: Option<Color>) -> Result<()> {
        self.attrs.text_stroke = color;
        self.changed(Attribute::TextStroke)
    }

    pub fn text_stroke_width(&self) -> Option<f32> {
        self.attrs.text_stroke_width
    }

    pub fn set_text_stroke_width(&mut self, width: Option<f32>) -> Result<()> {
        self.attrs.text_stroke_width = width;
        self.changed(Attribute::TextStrokeWidth)
    }

    pub fn padding(&self) -> f32 {
        self.attrs.padding
    }

    pub fn set_padding(&mut self, padding: f32) -> Result<()> {
        self.attrs.padding = padding;
        self.changed(Attribute::Padding)
    }

    pub fn align(&self) -> Align {
        self.attrs.align
    }

    pub fn set_align(&mut self, align: Align) -> Result<()> {
        self.attrs.align = align;
        self.changed(Attribute::Align)
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.attrs.vertical_align
    }

    pub fn set_vertical_align(&mut self, align: VerticalAlign) -> Result<()> {
        self.attrs.vertical_align = align;
        self.changed(Attribute::VerticalAlign)
    }

    pub fn text(&self) -> &str {
        &self.attrs.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.attrs.text = text.into();
        self.changed(Attribute::Text)
    }

    pub fn width(&self) -> BoxSizeMode {
        self.attrs.width
    }

    pub fn set_width(&mut self, width: BoxSizeMode) -> Result<()> {
        self.attrs.width = width;
        self.changed(Attribute::Width)
    }

    pub fn height(&self) -> BoxSizeMode {
        self.attrs.height
    }

    pub fn set_height(&mut self, height: BoxSizeMode) -> Result<()> {
        self.attrs.height = height;
        self.changed(Attribute::Height)
    }

    pub fn corner_radius(&self) -> f32 {
        self.attrs.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: f32) -> Result<()> {
        self.attrs.corner_radius = radius;
        self.changed(Attribute::CornerRadius)
    }

    pub fn fill(&self) -> Option<Color> {
        self.attrs.fill
    }

    pub fn set_fill(&mut self, color: Option<Color>) -> Result<()> {
        self.attrs.fill = color;
        self.changed(Attribute::Fill)
    }

    pub fn stroke(&self) -> Option<Color> {
        self.attrs.stroke
    }

    pub fn set_stroke(&mut self, color: Option<Color>) -> Result<()> {
        self.attrs.stroke = color;
        self.changed(Attribute::Stroke)
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.attrs.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: Option<f32>) -> Result<()> {
        self.attrs.stroke_width = width;
        self.changed(Attribute::StrokeWidth)
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.attrs.shadow
    }

    pub fn set_shadow(&mut self, shadow: Option<Shadow>) -> Result<()> {
        self.attrs.shadow = shadow;
        self.changed(Attribute::Shadow)
    }

    pub fn hit_detection(&self) -> HitDetection {
        self.attrs.hit_detection
    }

    pub fn set_hit_detection(&mut self, mode: HitDetection) -> Result<()> {
        self.attrs.hit_detection = mode;
        self.changed(Attribute::HitDetection)
    }
}

impl std::fmt::Debug for TextElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextElement")
            .field("attrs", &self.attrs)
            .field("box_shape", &self.box_shape)
            .field("glyph", &self.glyph)
            .field("metrics", &self.metrics.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedMetrics, Op, RecordingSurface};

    fn hi(config: TextConfig) -> TextElement {
        TextElement::new(
            TextConfig {
                text: Some("Hi".into()),
                ..config
            },
            Arc::new(FixedMetrics::new(10.0, 12.0)),
        )
        .unwrap()
    }

    #[test]
    fn construction_syncs_box_size() {
        let element = hi(TextConfig {
            padding: Some(6.0),
            ..TextConfig::default()
        });

        assert_eq!(element.box_shape().width(), 16.0);
        assert_eq!(element.box_shape().height(), 18.0);
    }

    #[test]
    fn size_queries_measure_current_text() {
        let element = hi(TextConfig::default());

        assert_eq!(element.text_width().unwrap(), 10.0);
        assert_eq!(element.text_height().unwrap(), 12.0);
        assert_eq!(element.box_width().unwrap(), 10.0);
        assert_eq!(element.box_height().unwrap(), 12.0);
    }

    #[test]
    fn tracked_setters_resync_children() {
        let mut element = hi(TextConfig::default());

        element.set_width(BoxSizeMode::Fixed(40.0)).unwrap();
        assert_eq!(element.box_shape().width(), 40.0);

        element.set_fill(Some(Color::white())).unwrap();
        assert_eq!(element.box_shape().fill(), Some(Color::white()));

        element.set_text_stroke(Some(Color::black())).unwrap();
        assert_eq!(element.glyph_shape().text_stroke(), Some(Color::black()));

        element.set_hit_detection(HitDetection::Pixel).unwrap();
        assert_eq!(element.box_shape().hit_detection(), HitDetection::Pixel);
        assert_eq!(element.glyph_shape().hit_detection(), HitDetection::Pixel);

        element.set_shadow(Some(Shadow::default())).unwrap();
        assert_eq!(element.box_shape().shadow(), Some(Shadow::default()));
        assert_eq!(element.glyph_shape().shadow(), Some(Shadow::default()));
    }

    #[test]
    fn padding_change_resizes_box() {
        let mut element = hi(TextConfig::default());
        element.set_padding(10.0).unwrap();

        assert_eq!(element.box_shape().width(), 20.0);
        assert_eq!(element.box_shape().height(), 22.0);
    }

    #[test]
    fn bulk_update_merges_and_syncs() {
        let mut element = hi(TextConfig {
            stroke: Some(Color::black()),
            ..TextConfig::default()
        });
        element
            .set_attrs(TextConfig {
                corner_radius: Some(4.0),
                height: Some(BoxSizeMode::Fixed(30.0)),
                ..TextConfig::default()
            })
            .unwrap();

        assert_eq!(element.stroke(), Some(Color::black()));
        assert_eq!(element.box_shape().corner_radius(), 4.0);
        assert_eq!(element.box_shape().height(), 30.0);
    }

    #[test]
    fn draw_paints_box_before_text_and_restores_state() {
        let mut element = hi(TextConfig {
            fill: Some(Color::white()),
            text_fill: Some(Color::black()),
            ..TextConfig::default()
        });
        let mut surface = RecordingSurface::new();
        let layout = element.draw(&mut surface).unwrap();

        assert_eq!(layout.box_width, 10.0);
        let box_rect = surface.position(&Op::Rect(0.0, 0.0, 10.0, 12.0)).unwrap();
        let box_fill = surface.position(&Op::Fill).unwrap();
        let text = surface.position(&Op::FillText("Hi".into())).unwrap();
        assert!(box_rect < box_fill && box_fill < text);
        assert_eq!(surface.depth, 0);
    }

    #[test]
    fn draw_propagates_metrics_failure_untouched() {
        let mut element =
            TextElement::new(TextConfig::default(), Arc::new(FixedMetrics::failing())).unwrap();
        element.set_text("Hi").unwrap_err();

        let mut surface = RecordingSurface::new();
        let err = element.draw(&mut surface).unwrap_err();
        assert!(matches!(err, crate::TextBoxError::Metrics(_)));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn shadow_painted_once_per_draw() {
        let mut element = hi(TextConfig {
            fill: Some(Color::white()),
            text_fill: Some(Color::black()),
            shadow: Some(Shadow::default()),
            ..TextConfig::default()
        });
        let mut surface = RecordingSurface::new();
        element.draw(&mut surface).unwrap();

        assert_eq!(surface.count(|op| matches!(op, Op::Shadow(Some(_)))), 1);
    }

    #[test]
    fn glyph_takes_shadow_when_box_paints_nothing() {
        let mut element = hi(TextConfig {
            text_fill: Some(Color::black()),
            shadow: Some(Shadow::default()),
            ..TextConfig::default()
        });
        let mut surface = RecordingSurface::new();
        element.draw(&mut surface).unwrap();

        let shadow = surface
            .position(&Op::Shadow(Some(Shadow::default())))
            .unwrap();
        let text = surface.position(&Op::FillText("Hi".into())).unwrap();
        assert!(shadow < text);
    }

    #[test]
    fn failed_measurement_still_mirrors_attributes() {
        let mut element = TextElement::new(
            TextConfig {
                text: Some("Hi".into()),
                ..TextConfig::default()
            },
            Arc::new(FixedMetrics::rejecting(10.0, 12.0, 'x')),
        )
        .unwrap();
        element.set_fill(Some(Color::white())).unwrap();

        assert!(element.set_text("x").is_err());
        assert!(element.set_fill(Some(Color::black())).is_err());
        assert!(element.set_shadow(Some(Shadow::default())).is_err());
        assert!(element.set_text_fill(Some(Color::white())).is_err());

        assert_eq!(element.box_shape().fill(), Some(Color::black()));
        assert_eq!(element.box_shape().shadow(), Some(Shadow::default()));
        assert_eq!(element.glyph_shape().shadow(), Some(Shadow::default()));
        assert_eq!(element.glyph_shape().text_fill(), Some(Color::white()));
        // Size stays at the last good layout
        assert_eq!(element.box_shape().width(), 10.0);

        element.set_text("Hi again").unwrap();
        assert_eq!(element.box_shape().fill(), Some(Color::black()));
    }
}
