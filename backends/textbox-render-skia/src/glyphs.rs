//! Glyph runs as vector paths
//!
//! Text is painted by turning every glyph outline into path segments, so the
//! same fill and stroke code that paints boxes paints text.

use kurbo::BezPath;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::MetadataProvider;
use textbox_core::error::SurfaceError;

use crate::fonts::Font;

/// Outlines of one line of text, baseline at y = 0, y pointing down
pub(crate) struct GlyphRun {
    pub path: BezPath,
    pub advance: f32,
}

/// Lay out `text` left to right with no shaping and collect its outlines
pub(crate) fn build_run(font: &Font, text: &str, size_px: f32) -> Result<GlyphRun, SurfaceError> {
    let font_ref = font
        .font_ref()
        .ok_or_else(|| SurfaceError::Backend("font data no longer parses".into()))?;
    let outlines = font_ref.outline_glyphs();
    let charmap = font_ref.charmap();
    let glyph_metrics = font_ref.glyph_metrics(Size::new(size_px), LocationRef::default());

    let mut path = BezPath::new();
    let mut pen_x = 0.0f32;
    for ch in text.chars() {
        let glyph_id = charmap.map(ch).unwrap_or(skrifa::GlyphId::NOTDEF);
        if let Some(glyph) = outlines.get(glyph_id) {
            let mut pen = PathPen {
                path: &mut path,
                origin_x: pen_x as f64,
            };
            let settings = DrawSettings::unhinted(Size::new(size_px), LocationRef::default());
            glyph
                .draw(settings, &mut pen)
                .map_err(|_| SurfaceError::OutlineExtractionFailed(glyph_id.to_u32()))?;
        } else {
            log::warn!("no outline for {:?} (glyph {})", ch, glyph_id.to_u32());
        }
        pen_x += glyph_metrics.advance_width(glyph_id).unwrap_or(0.0);
    }

    log::trace!(
        "glyph run of {} chars, advance {}",
        text.chars().count(),
        pen_x
    );
    Ok(GlyphRun {
        path,
        advance: pen_x,
    })
}

/// Collects outline segments into a kurbo path, flipping font y-up into
/// screen y-down and shifting each glyph to its pen position
struct PathPen<'a> {
    path: &'a mut BezPath,
    origin_x: f64,
}

impl PathPen<'_> {
    fn point(&self, x: f32, y: f32) -> (f64, f64) {
        (self.origin_x + x as f64, -(y as f64))
    }
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.point(cx0, cy0), self.point(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (self.point(cx0, cy0), self.point(cx1, cy1), self.point(x, y));
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};
    use skrifa::outline::OutlinePen;
    use std::path::PathBuf;

    fn mono() -> Font {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.pop(); // textbox-render-skia
        path.pop(); // backends
        path.push("test-fonts");
        path.push("DejaVuSansMono.ttf");
        Font::from_file(path).unwrap()
    }

    #[test]
    fn test_run_sits_on_baseline() {
        let font = mono();
        let run = build_run(&font, "Hi", 24.0).unwrap();

        assert!((run.advance - font.text_advance("Hi", 24.0)).abs() < 1e-3);
        let bbox = run.path.bounding_box();
        assert!(bbox.y0 < -10.0);
        assert!(bbox.y1 <= 0.5);
        assert!(bbox.x0 >= 0.0 && (bbox.x1 as f32) <= run.advance);
    }

    #[test]
    fn test_empty_run() {
        let run = build_run(&mono(), "", 24.0).unwrap();
        assert_eq!(run.advance, 0.0);
        assert!(run.path.elements().is_empty());
    }

    #[test]
    fn test_pen_flips_and_offsets() {
        let mut path = BezPath::new();
        let mut pen = PathPen {
            path: &mut path,
            origin_x: 10.0,
        };
        pen.move_to(1.0, 2.0);
        pen.line_to(3.0, -4.0);
        pen.close();

        let elements = path.elements();
        assert_eq!(elements[0], PathEl::MoveTo((11.0, -2.0).into()));
        assert_eq!(elements[1], PathEl::LineTo((13.0, 4.0).into()));
        assert_eq!(elements[2], PathEl::ClosePath);
    }
}
