//! The contracts that bind every backend together
//!
//! Two traits sit at the edges of this crate:
//!
//! - [`MetricsProvider`] - How wide is this text in this font?
//! - [`Surface`] - A canvas-like target with a save/restore state stack
//!
//! Everything in between (layout, sync, paint order) is backend-agnostic.

use crate::error::{MetricsError, SurfaceError};
use crate::layout::TextMetrics;
use crate::types::{Color, Shadow, TextAlign, TextBaseline};

/// Your window into font metrics
///
/// The descriptor has the form `"<style> <size>pt <family>"` (see
/// [`crate::FontDescriptor`]). Implementations must return non-negative,
/// finite numbers.
///
/// ```ignore
/// struct Monospace;
///
/// impl MetricsProvider for Monospace {
///     fn name(&self) -> &'static str {
///         "monospace"
///     }
///
///     fn measure(&self, font: &str, text: &str) -> Result<TextMetrics, MetricsError> {
///         let d = FontDescriptor::parse(font).map_err(|e| MetricsError::Backend(e.to_string()))?;
///         Ok(TextMetrics {
///             width: text.chars().count() as f32 * d.size_px() * 0.6,
///             height: d.size_px(),
///         })
///     }
/// }
/// ```
pub trait MetricsProvider {
    /// Who are you? Used for debugging and logging
    fn name(&self) -> &'static str;

    /// Measure `text` set in the font named by `font`
    fn measure(&self, font: &str, text: &str) -> Result<TextMetrics, MetricsError>;
}

/// Where paint lands
///
/// Mirrors the subset of a 2D canvas context that a text box needs. Paths are
/// built in user space and mapped through the current transform as they are
/// added. `save`/`restore` push and pop the whole graphics state: transform,
/// clip, colours, line width, font, text anchors and shadow. The current path
/// is not part of that state.
pub trait Surface {
    /// Push a copy of the graphics state
    fn save(&mut self);

    /// Pop the graphics state; a restore without a matching save is ignored
    fn restore(&mut self);

    /// Post-multiply a translation onto the current transform
    fn translate(&mut self, dx: f32, dy: f32);

    /// Discard the current path
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Add a closed rectangle subpath
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Add a circular arc, clockwise in screen space from `start` to `end` radians
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32);

    fn close_path(&mut self);

    /// Intersect the clip region with the current path
    fn clip(&mut self) -> Result<(), SurfaceError>;

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Shadow applied to subsequent paint operations, `None` to disable
    fn set_shadow(&mut self, shadow: Option<Shadow>);

    /// Paint the current path with the fill colour
    fn fill(&mut self) -> Result<(), SurfaceError>;

    /// Outline the current path with the stroke colour and line width
    fn stroke(&mut self) -> Result<(), SurfaceError>;

    /// Select the font for text painting by descriptor
    fn set_font(&mut self, font: &str) -> Result<(), SurfaceError>;

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn set_text_align(&mut self, align: TextAlign);

    /// Paint `text` at the origin with the fill colour
    fn fill_text(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Outline `text` at the origin with the stroke colour and line width
    fn stroke_text(&mut self, text: &str) -> Result<(), SurfaceError>;
}
