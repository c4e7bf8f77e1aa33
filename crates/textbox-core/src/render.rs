//! Paint sequencing for the glyph run
//!
//! Every change this module makes to a surface happens between a `save` and a
//! `restore`. The restore lives in [`StateGuard`]'s `Drop`, so it runs on the
//! error path too.

use crate::config::TextAttrs;
use crate::error::{Result, SurfaceError};
use crate::layout::LayoutResult;
use crate::shapes::GlyphShape;
use crate::traits::Surface;
use crate::types::{Shadow, TextAlign, TextBaseline};
use std::ops::{Deref, DerefMut};

/// Saves the surface state on creation and restores it on drop
pub struct StateGuard<'a> {
    surface: &'a mut dyn Surface,
}

impl<'a> StateGuard<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<'a> Deref for StateGuard<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for StateGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Run one paint operation in its own state scope
///
/// The shadow is applied only while `shadow_applied` is still false; once a
/// step paints with it, later steps of the same draw skip it.
pub(crate) fn paint_step(
    surface: &mut dyn Surface,
    shadow: Option<Shadow>,
    shadow_applied: &mut bool,
    paint: impl FnOnce(&mut dyn Surface) -> std::result::Result<(), SurfaceError>,
) -> std::result::Result<(), SurfaceError> {
    let mut state = StateGuard::new(surface);
    let shadow = shadow.filter(|_| !*shadow_applied);
    if shadow.is_some() {
        state.set_shadow(shadow);
    }
    paint(&mut *state)?;
    if shadow.is_some() {
        *shadow_applied = true;
    }
    Ok(())
}

/// Paint the text run of one layout
///
/// The run is anchored left with a middle baseline and positioned purely by
/// translating to `(dx, dy)`. The padded content rectangle is always added to
/// the path but only becomes a clip when the layout asks for one.
pub fn draw_glyph_run(
    surface: &mut dyn Surface,
    attrs: &TextAttrs,
    layout: &LayoutResult,
    glyph: &GlyphShape,
    shadow_applied: &mut bool,
) -> Result<()> {
    let mut state = StateGuard::new(surface);

    state.set_font(&attrs.font_descriptor().to_string())?;
    state.set_text_baseline(TextBaseline::Middle);
    state.set_text_align(TextAlign::Left);

    let clip = layout.clip_rect();
    state.begin_path();
    state.rect(clip.x, clip.y, clip.width, clip.height);
    state.close_path();
    if layout.should_clip {
        state.clip()?;
    }

    state.translate(layout.dx, layout.dy);
    glyph.paint(&mut *state, &attrs.text, shadow_applied)?;

    log::trace!(
        "glyph run {:?} at ({}, {}), clipped={}",
        attrs.text,
        layout.dx,
        layout.dy,
        layout.should_clip
    );
    Ok(())
}
