//! Textbox - Text in a box, measured, aligned and painted
//!
//! A [`TextElement`] composes a background box and a single run of text.
//! It measures the text through a [`MetricsProvider`], sizes the box around
//! it, and paints both onto any [`Surface`].
//!
//! # Example
//!
//! ```
//! # #[cfg(all(feature = "metrics-none", feature = "render-json"))]
//! # fn main() -> textbox::prelude::Result<()> {
//! use std::sync::Arc;
//! use textbox::prelude::*;
//! use textbox::{metrics_none::NoneMetrics, render_json::JsonSurface};
//!
//! let mut label = TextElement::new(
//!     TextConfig {
//!         text: Some("Ready".into()),
//!         padding: Some(8.0),
//!         fill: Some(Color::white()),
//!         text_fill: Some(Color::black()),
//!         ..TextConfig::default()
//!     },
//!     Arc::new(NoneMetrics::new()),
//! )?;
//!
//! let mut surface = JsonSurface::new();
//! let layout = label.draw(&mut surface)?;
//! assert!(layout.box_width > layout.text_width);
//! assert!(surface.is_balanced());
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "metrics-none", feature = "render-json")))]
//! # fn main() {}
//! ```
//!
//! # Feature Flags
//!
//! - `metrics-none`: font-free character-count metrics
//! - `render-json`: surface that records draw calls as JSON
//! - `render-skia`: tiny-skia raster surface with real font metrics
//! - `full`: all of the above

pub use textbox_core::{
    config, error, font, layout, render, shapes, sync, traits, types, BoxShape, FontDescriptor,
    GlyphShape, LayoutResult, MetricsProvider, Surface, TextAttrs, TextConfig, TextElement,
    TextMetrics, DEFAULTS,
};

#[cfg(feature = "metrics-none")]
pub use textbox_metrics_none as metrics_none;

#[cfg(feature = "render-json")]
pub use textbox_render_json as render_json;

#[cfg(feature = "render-skia")]
pub use textbox_render_skia as render_skia;

/// Common imports for typical usage
pub mod prelude {
    pub use textbox_core::{
        config::TextConfig,
        error::{Result, TextBoxError},
        traits::{MetricsProvider, Surface},
        types::{Align, BoxSizeMode, Color, FontStyle, HitDetection, Shadow, VerticalAlign},
        LayoutResult, TextElement,
    };
}
