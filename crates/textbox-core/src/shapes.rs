//! The two child drawables a text element is built from
//!
//! Both expose their attributes read-only. Only the sync step inside this
//! crate writes them, so they always mirror the owning element.

use crate::error::SurfaceError;
use crate::render::paint_step;
use crate::traits::Surface;
use crate::types::{Color, HitDetection, Shadow};
use std::f32::consts::{FRAC_PI_2, PI};

/// Line width used when a stroke colour is set without a width
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// The background rectangle behind the text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxShape {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) corner_radius: f32,
    pub(crate) stroke: Option<Color>,
    pub(crate) stroke_width: Option<f32>,
    pub(crate) fill: Option<Color>,
    pub(crate) shadow: Option<Shadow>,
    pub(crate) hit_detection: HitDetection,
}

impl BoxShape {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    pub fn hit_detection(&self) -> HitDetection {
        self.hit_detection
    }

    /// Trace the outline, then fill and stroke it
    ///
    /// Returns whether the shadow was painted, so the glyph run can skip it.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<bool, SurfaceError> {
        surface.begin_path();
        if self.corner_radius == 0.0 {
            surface.rect(0.0, 0.0, self.width, self.height);
        } else {
            self.trace_rounded(surface);
        }
        surface.close_path();

        let mut shadow_applied = false;
        if let Some(fill) = self.fill {
            paint_step(surface, self.shadow, &mut shadow_applied, |s| {
                s.set_fill_color(fill);
                s.fill()
            })?;
        }
        if let Some(stroke) = self.stroke {
            let width = self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
            paint_step(surface, self.shadow, &mut shadow_applied, |s| {
                s.set_stroke_color(stroke);
                s.set_line_width(width);
                s.stroke()
            })?;
        }
        Ok(shadow_applied)
    }

    fn trace_rounded(&self, surface: &mut dyn Surface) {
        let (w, h, r) = (self.width, self.height, self.corner_radius);
        surface.move_to(r, 0.0);
        surface.line_to(w - r, 0.0);
        surface.arc(w - r, r, r, 3.0 * FRAC_PI_2, 2.0 * PI);
        surface.line_to(w, h - r);
        surface.arc(w - r, h - r, r, 0.0, FRAC_PI_2);
        surface.line_to(r, h);
        surface.arc(r, h - r, r, FRAC_PI_2, PI);
        surface.line_to(0.0, r);
        surface.arc(r, r, r, PI, 3.0 * FRAC_PI_2);
    }
}

/// The text run itself
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphShape {
    pub(crate) text_fill: Option<Color>,
    pub(crate) text_stroke: Option<Color>,
    pub(crate) text_stroke_width: Option<f32>,
    pub(crate) shadow: Option<Shadow>,
    pub(crate) hit_detection: HitDetection,
}

impl GlyphShape {
    pub fn text_fill(&self) -> Option<Color> {
        self.text_fill
    }

    pub fn text_stroke(&self) -> Option<Color> {
        self.text_stroke
    }

    pub fn text_stroke_width(&self) -> Option<f32> {
        self.text_stroke_width
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    pub fn hit_detection(&self) -> HitDetection {
        self.hit_detection
    }

    /// Fill then stroke `text` at the surface origin
    ///
    /// `shadow_applied` carries over from the box so one draw paints the
    /// shadow at most once.
    pub fn paint(
        &self,
        surface: &mut dyn Surface,
        text: &str,
        shadow_applied: &mut bool,
    ) -> Result<(), SurfaceError> {
        if let Some(fill) = self.text_fill {
            paint_step(surface, self.shadow, shadow_applied, |s| {
                s.set_fill_color(fill);
                s.fill_text(text)
            })?;
        }
        if let Some(stroke) = self.text_stroke {
            let width = self.text_stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
            paint_step(surface, self.shadow, shadow_applied, |s| {
                s.set_stroke_color(stroke);
                s.set_line_width(width);
                s.stroke_text(text)
            })?;
        }
        Ok(())
    }
}
