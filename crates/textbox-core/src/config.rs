//! Attribute defaults and caller configuration
//!
//! [`DEFAULTS`] is the one place default attribute values live. A
//! [`TextConfig`] names only what the caller wants to change; merging it over
//! the defaults (at construction) or over the current attributes (in
//! [`crate::TextElement::set_attrs`]) yields a complete [`TextAttrs`].
//!
//! ```
//! use textbox_core::{config::TextConfig, types::VerticalAlign, TextAttrs};
//!
//! let attrs = TextAttrs::from_config(TextConfig {
//!     text: Some("Ready".into()),
//!     vertical_align: Some(VerticalAlign::Middle),
//!     ..TextConfig::default()
//! });
//!
//! assert_eq!(attrs.font_family, "Calibri");
//! assert_eq!(attrs.font_size, 12.0);
//! assert_eq!(attrs.vertical_align, VerticalAlign::Middle);
//! ```

use crate::font::FontDescriptor;
use crate::types::{
    Align, Alignment, BoxSizeMode, Color, FontStyle, HitDetection, Shadow, VerticalAlign,
};

/// Default values for every attribute that has one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextDefaults {
    pub font_family: &'static str,
    pub text: &'static str,
    pub font_size: f32,
    pub align: Align,
    pub vertical_align: VerticalAlign,
    pub font_style: FontStyle,
    pub padding: f32,
    pub width: BoxSizeMode,
    pub height: BoxSizeMode,
    pub hit_detection: HitDetection,
    pub corner_radius: f32,
}

pub const DEFAULTS: TextDefaults = TextDefaults {
    font_family: "Calibri",
    text: "",
    font_size: 12.0,
    align: Align::Left,
    vertical_align: VerticalAlign::Top,
    font_style: FontStyle::Normal,
    padding: 0.0,
    width: BoxSizeMode::Auto,
    height: BoxSizeMode::Auto,
    hit_detection: HitDetection::Path,
    corner_radius: 0.0,
};

/// The full attribute record of a text element
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttrs {
    pub font_family: String,
    /// Size in points
    pub font_size: f32,
    pub font_style: FontStyle,
    pub text_fill: Option<Color>,
    pub text_stroke: Option<Color>,
    pub text_stroke_width: Option<f32>,
    pub padding: f32,
    pub align: Align,
    pub vertical_align: VerticalAlign,
    pub text: String,
    pub width: BoxSizeMode,
    pub height: BoxSizeMode,
    pub corner_radius: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f32>,
    pub shadow: Option<Shadow>,
    pub hit_detection: HitDetection,
}

impl TextAttrs {
    /// Merge `config` over [`DEFAULTS`]
    pub fn from_config(config: TextConfig) -> Self {
        let mut attrs = Self::from(DEFAULTS);
        config.apply_to(&mut attrs);
        attrs
    }

    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_style, self.font_size, self.font_family.clone())
    }

    pub fn alignment(&self) -> Alignment {
        Alignment::new(self.align, self.vertical_align)
    }
}

impl From<TextDefaults> for TextAttrs {
    fn from(d: TextDefaults) -> Self {
        Self {
            font_family: d.font_family.to_string(),
            font_size: d.font_size,
            font_style: d.font_style,
            text_fill: None,
            text_stroke: None,
            text_stroke_width: None,
            padding: d.padding,
            align: d.align,
            vertical_align: d.vertical_align,
            text: d.text.to_string(),
            width: d.width,
            height: d.height,
            corner_radius: d.corner_radius,
            fill: None,
            stroke: None,
            stroke_width: None,
            shadow: None,
            hit_detection: d.hit_detection,
        }
    }
}

impl Default for TextAttrs {
    fn default() -> Self {
        Self::from(DEFAULTS)
    }
}

/// Caller-supplied attributes; `None` leaves the current value alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextConfig {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_style: Option<FontStyle>,
    pub text_fill: Option<Color>,
    pub text_stroke: Option<Color>,
    pub text_stroke_width: Option<f32>,
    pub padding: Option<f32>,
    pub align: Option<Align>,
    pub vertical_align: Option<VerticalAlign>,
    pub text: Option<String>,
    pub width: Option<BoxSizeMode>,
    pub height: Option<BoxSizeMode>,
    pub corner_radius: Option<f32>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f32>,
    pub shadow: Option<Shadow>,
    pub hit_detection: Option<HitDetection>,
}

impl TextConfig {
    /// Overwrite every attribute this config names
    pub fn apply_to(self, attrs: &mut TextAttrs) {
        fn put<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }
        fn put_some<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        put(&mut attrs.font_family, self.font_family);
        put(&mut attrs.font_size, self.font_size);
        put(&mut attrs.font_style, self.font_style);
        put_some(&mut attrs.text_fill, self.text_fill);
        put_some(&mut attrs.text_stroke, self.text_stroke);
        put_some(&mut attrs.text_stroke_width, self.text_stroke_width);
        put(&mut attrs.padding, self.padding);
        put(&mut attrs.align, self.align);
        put(&mut attrs.vertical_align, self.vertical_align);
        put(&mut attrs.text, self.text);
        put(&mut attrs.width, self.width);
        put(&mut attrs.height, self.height);
        put(&mut attrs.corner_radius, self.corner_radius);
        put_some(&mut attrs.fill, self.fill);
        put_some(&mut attrs.stroke, self.stroke);
        put_some(&mut attrs.stroke_width, self.stroke_width);
        put_some(&mut attrs.shadow, self.shadow);
        put(&mut attrs.hit_detection, self.hit_detection);
    }
}
