//! Textbox Core: a padded, aligned run of text inside a painted box
//!
//! A [`TextElement`] owns two child drawables, a background [`BoxShape`] and a
//! [`GlyphShape`] carrying the text run. Every draw goes through the same four
//! steps:
//!
//! 1. **Measure** - a [`MetricsProvider`] reports the advance width of the text
//! 2. **Lay out** - [`layout::compute_layout`] resolves box size, text origin and the clip decision
//! 3. **Sync** - [`sync::sync_children`] mirrors composite attributes onto both children
//! 4. **Paint** - the box paints itself, then [`render::draw_glyph_run`] paints the text
//!
//! ```rust
//! use textbox_core::{
//!     config::TextConfig, error::MetricsError, traits::MetricsProvider,
//!     types::{Align, BoxSizeMode}, TextElement, TextMetrics,
//! };
//! use std::sync::Arc;
//!
//! struct TenWide;
//!
//! impl MetricsProvider for TenWide {
//!     fn name(&self) -> &'static str {
//!         "ten-wide"
//!     }
//!
//!     fn measure(&self, _font: &str, _text: &str) -> Result<TextMetrics, MetricsError> {
//!         Ok(TextMetrics { width: 10.0, height: 12.0 })
//!     }
//! }
//!
//! let element = TextElement::new(
//!     TextConfig {
//!         text: Some("Hi".into()),
//!         width: Some(BoxSizeMode::Fixed(20.0)),
//!         padding: Some(2.0),
//!         align: Some(Align::Right),
//!         ..TextConfig::default()
//!     },
//!     Arc::new(TenWide),
//! )?;
//!
//! let layout = element.layout()?;
//! assert_eq!(layout.box_width, 22.0);
//! assert_eq!(layout.dx, 11.0);
//! # Ok::<(), textbox_core::TextBoxError>(())
//! ```
//!
//! ## The Collaborators
//!
//! - [`traits::MetricsProvider`] - measures text for a font descriptor
//! - [`traits::Surface`] - the canvas-like target every paint step writes to

pub mod config;
pub mod element;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod shapes;
pub mod sync;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{TextAttrs, TextConfig, DEFAULTS};
pub use element::TextElement;
pub use error::{Result, TextBoxError};
pub use font::FontDescriptor;
pub use layout::{LayoutResult, TextMetrics};
pub use shapes::{BoxShape, GlyphShape};
pub use traits::{MetricsProvider, Surface};

/// The attribute value types shared by the composite and its children
pub mod types {
    use crate::error::TextBoxError;
    use std::fmt;
    use std::str::FromStr;

    /// How a box dimension is chosen
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub enum BoxSizeMode {
        /// Follow the measured text
        #[default]
        Auto,
        /// Use this many pixels regardless of the text
        Fixed(f32),
    }

    impl BoxSizeMode {
        /// Pick the dimension for this mode given the measured one
        pub fn resolve(self, measured: f32) -> f32 {
            match self {
                BoxSizeMode::Auto => measured,
                BoxSizeMode::Fixed(value) => value,
            }
        }

        pub fn is_auto(self) -> bool {
            matches!(self, BoxSizeMode::Auto)
        }
    }

    impl FromStr for BoxSizeMode {
        type Err = TextBoxError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let s = s.trim();
            if s.eq_ignore_ascii_case("auto") {
                return Ok(BoxSizeMode::Auto);
            }
            s.parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(BoxSizeMode::Fixed)
                .ok_or_else(|| TextBoxError::invalid("box size", s))
        }
    }

    /// Horizontal placement of the run inside the box
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Align {
        #[default]
        Left,
        Center,
        Right,
    }

    impl FromStr for Align {
        type Err = TextBoxError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "left" => Ok(Align::Left),
                "center" => Ok(Align::Center),
                "right" => Ok(Align::Right),
                _ => Err(TextBoxError::invalid("align", s)),
            }
        }
    }

    /// Vertical placement of the run inside the box
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum VerticalAlign {
        #[default]
        Top,
        Middle,
        Bottom,
    }

    impl FromStr for VerticalAlign {
        type Err = TextBoxError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "top" => Ok(VerticalAlign::Top),
                "middle" => Ok(VerticalAlign::Middle),
                "bottom" => Ok(VerticalAlign::Bottom),
                _ => Err(TextBoxError::invalid("verticalAlign", s)),
            }
        }
    }

    /// Both alignment axes, one value each
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Alignment {
        pub horizontal: Align,
        pub vertical: VerticalAlign,
    }

    impl Alignment {
        pub const fn new(horizontal: Align, vertical: VerticalAlign) -> Self {
            Self {
                horizontal,
                vertical,
            }
        }
    }

    /// Font style keyword as it appears in a font descriptor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum FontStyle {
        #[default]
        Normal,
        Italic,
        Oblique,
        Bold,
    }

    impl FontStyle {
        pub fn as_str(self) -> &'static str {
            match self {
                FontStyle::Normal => "normal",
                FontStyle::Italic => "italic",
                FontStyle::Oblique => "oblique",
                FontStyle::Bold => "bold",
            }
        }
    }

    impl fmt::Display for FontStyle {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for FontStyle {
        type Err = TextBoxError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "normal" => Ok(FontStyle::Normal),
                "italic" => Ok(FontStyle::Italic),
                "oblique" => Ok(FontStyle::Oblique),
                "bold" => Ok(FontStyle::Bold),
                _ => Err(TextBoxError::invalid("fontStyle", s)),
            }
        }
    }

    /// How hit testing treats the element
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum HitDetection {
        /// Hit region is the drawn path
        #[default]
        Path,
        /// Hit region is the painted pixels
        Pixel,
    }

    impl FromStr for HitDetection {
        type Err = TextBoxError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "path" => Ok(HitDetection::Path),
                "pixel" => Ok(HitDetection::Pixel),
                _ => Err(TextBoxError::invalid("hitDetection", s)),
            }
        }
    }

    /// Vertical anchor the surface uses when painting a glyph run
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TextBaseline {
        Top,
        Middle,
        #[default]
        Alphabetic,
        Bottom,
    }

    /// Horizontal anchor the surface uses when painting a glyph run
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TextAlign {
        #[default]
        Left,
        Center,
        Right,
    }

    /// Simple RGBA color that works everywhere
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Color {
        pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self { r, g, b, a }
        }

        pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
            Self::rgba(r, g, b, 255)
        }

        pub const fn black() -> Self {
            Self::rgb(0, 0, 0)
        }

        pub const fn white() -> Self {
            Self::rgb(255, 255, 255)
        }

        /// Same color with its alpha scaled by `factor` (clamped to 0..=1)
        pub fn with_alpha_factor(self, factor: f32) -> Self {
            let factor = factor.clamp(0.0, 1.0);
            Self {
                a: (self.a as f32 * factor).round() as u8,
                ..self
            }
        }

        fn from_hex(hex: &str) -> Option<Self> {
            let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            match hex.len() {
                3 => Some(Self::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
                6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
                8 => Some(Self::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
                _ => None,
            }
        }
    }

    impl FromStr for Color {
        type Err = TextBoxError;

        /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and a handful of CSS names
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let trimmed = s.trim();
            if let Some(hex) = trimmed.strip_prefix('#') {
                return Self::from_hex(hex).ok_or_else(|| TextBoxError::invalid("color", s));
            }
            let named = match trimmed.to_ascii_lowercase().as_str() {
                "black" => Color::black(),
                "white" => Color::white(),
                "red" => Color::rgb(255, 0, 0),
                "green" => Color::rgb(0, 128, 0),
                "blue" => Color::rgb(0, 0, 255),
                "yellow" => Color::rgb(255, 255, 0),
                "gray" | "grey" => Color::rgb(128, 128, 128),
                "transparent" => Color::rgba(0, 0, 0, 0),
                _ => return Err(TextBoxError::invalid("color", s)),
            };
            Ok(named)
        }
    }

    /// Drop shadow shared by the box and the glyph run
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Shadow {
        pub color: Color,
        pub blur: f32,
        pub offset_x: f32,
        pub offset_y: f32,
        /// Opacity multiplier applied on top of `color.a`
        pub alpha: f32,
    }

    impl Default for Shadow {
        fn default() -> Self {
            Self {
                color: Color::black(),
                blur: 5.0,
                offset_x: 0.0,
                offset_y: 0.0,
                alpha: 1.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn box_size_mode_parses_auto_and_numbers() {
        assert_eq!("auto".parse::<BoxSizeMode>().unwrap(), BoxSizeMode::Auto);
        assert_eq!(" AUTO ".parse::<BoxSizeMode>().unwrap(), BoxSizeMode::Auto);
        assert_eq!("42.5".parse::<BoxSizeMode>().unwrap(), BoxSizeMode::Fixed(42.5));
        assert!("wide".parse::<BoxSizeMode>().is_err());
        assert!("NaN".parse::<BoxSizeMode>().is_err());
    }

    #[test]
    fn box_size_mode_resolves_per_mode() {
        assert_eq!(BoxSizeMode::Auto.resolve(17.0), 17.0);
        assert_eq!(BoxSizeMode::Fixed(5.0).resolve(17.0), 5.0);
    }

    #[test]
    fn alignment_defaults_to_left_top() {
        let alignment = Alignment::default();
        assert_eq!(alignment.horizontal, Align::Left);
        assert_eq!(alignment.vertical, VerticalAlign::Top);
    }

    #[test]
    fn keyword_enums_parse_lowercase_names() {
        assert_eq!("center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("bottom".parse::<VerticalAlign>().unwrap(), VerticalAlign::Bottom);
        assert_eq!("Bold".parse::<FontStyle>().unwrap(), FontStyle::Bold);
        assert_eq!("pixel".parse::<HitDetection>().unwrap(), HitDetection::Pixel);
        assert!("justify".parse::<Align>().is_err());
    }

    #[test]
    fn colors_parse_hex_and_names() {
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#102030".parse::<Color>().unwrap(), Color::rgb(16, 32, 48));
        assert_eq!(
            "#10203040".parse::<Color>().unwrap(),
            Color::rgba(16, 32, 48, 64)
        );
        assert_eq!("Blue".parse::<Color>().unwrap(), Color::rgb(0, 0, 255));
        assert!("#12".parse::<Color>().is_err());
        assert!("#ggg".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn alpha_factor_is_clamped() {
        let c = Color::rgba(10, 20, 30, 200);
        assert_eq!(c.with_alpha_factor(0.5).a, 100);
        assert_eq!(c.with_alpha_factor(3.0).a, 200);
        assert_eq!(c.with_alpha_factor(-1.0).a, 0);
    }
}
