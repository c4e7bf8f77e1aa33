//! Skia Surface - Text boxes rasterized with tiny-skia
//!
//! [`SkiaSurface`] implements the textbox drawing surface on top of a
//! `tiny_skia::Pixmap`. Paths are built with kurbo in device space, glyph
//! outlines come from skrifa, and clipping uses anti-aliased masks.
//!
//! Shadows are painted as a hard copy of the shape at the shadow offset;
//! blur is recorded but not rasterized.

mod fonts;
mod glyphs;
mod metrics;

pub use fonts::{Font, FontBook, FontLoadError, VerticalMetrics};
pub use metrics::SkiaMetrics;

use std::f64::consts::TAU;
use std::path::Path;
use std::sync::Arc;

use kurbo::{Affine, BezPath, PathEl, Point, Vec2};
use textbox_core::{
    error::SurfaceError,
    types::{Color, Shadow, TextAlign, TextBaseline},
    FontDescriptor, Surface,
};
use tiny_skia::{FillRule, Mask, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Graphics state pushed by `save` and popped by `restore`
#[derive(Clone)]
struct State {
    transform: Affine,
    clip: Option<Mask>,
    fill: Color,
    stroke: Color,
    line_width: f32,
    font: Option<FontDescriptor>,
    baseline: TextBaseline,
    align: TextAlign,
    shadow: Option<Shadow>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            clip: None,
            fill: Color::black(),
            stroke: Color::black(),
            line_width: 1.0,
            font: None,
            baseline: TextBaseline::Alphabetic,
            align: TextAlign::Left,
            shadow: None,
        }
    }
}

/// A raster drawing surface
pub struct SkiaSurface {
    pixmap: Pixmap,
    book: Arc<FontBook>,
    state: State,
    stack: Vec<State>,
    path: BezPath,
}

impl SkiaSurface {
    /// Transparent surface of `width` x `height` pixels
    pub fn new(width: u32, height: u32, book: Arc<FontBook>) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(SurfaceError::InvalidDimensions { width, height })?;
        log::debug!("SkiaSurface: created {}x{}", width, height);
        Ok(Self {
            pixmap,
            book,
            state: State::default(),
            stack: Vec::new(),
            path: BezPath::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn font_book(&self) -> &Arc<FontBook> {
        &self.book
    }

    /// Number of saved states not yet restored
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Fill every pixel with `color`, ignoring clip and transform
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(skia_color(color));
    }

    /// Unpremultiplied colour of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.pixmap
            .encode_png()
            .map_err(|e| SurfaceError::Backend(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| SurfaceError::Backend(e.to_string()))
    }

    fn map(&self, x: f32, y: f32) -> Point {
        self.state.transform * Point::new(x as f64, y as f64)
    }

    fn has_current_point(&self) -> bool {
        !self.path.elements().is_empty()
    }

    /// Paint `path` (device space) with the shadow first, then the colour
    fn paint(&mut self, path: &tiny_skia::Path, color: Color, stroke: Option<&Stroke>) {
        if let Some(shadow) = self.state.shadow {
            let shadow_color = shadow.color.with_alpha_factor(shadow.alpha);
            if shadow_color.a > 0 {
                let offset = Transform::from_translate(shadow.offset_x, shadow.offset_y);
                self.paint_once(path, shadow_color, stroke, offset);
            }
        }
        self.paint_once(path, color, stroke, Transform::identity());
    }

    fn paint_once(
        &mut self,
        path: &tiny_skia::Path,
        color: Color,
        stroke: Option<&Stroke>,
        transform: Transform,
    ) {
        let mut paint = Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color(skia_color(color));

        let clip = self.state.clip.as_ref();
        match stroke {
            Some(stroke) => self
                .pixmap
                .stroke_path(path, &paint, stroke, transform, clip),
            None => self
                .pixmap
                .fill_path(path, &paint, FillRule::Winding, transform, clip),
        }
    }

    /// Line width in device pixels under the current transform
    fn device_stroke(&self) -> Stroke {
        let scale = self.state.transform.determinant().abs().sqrt() as f32;
        Stroke {
            width: self.state.line_width * scale,
            ..Default::default()
        }
    }

    fn paint_text(&mut self, text: &str, stroke: bool) -> Result<(), SurfaceError> {
        if text.is_empty() {
            return Ok(());
        }
        let descriptor = self.state.font.clone().ok_or(SurfaceError::NoFont)?;
        let font = self
            .book
            .lookup(&descriptor.family, descriptor.style)
            .ok_or_else(|| SurfaceError::MissingFont(descriptor.family.clone()))?;

        let size = descriptor.size_px();
        let mut run = glyphs::build_run(&font, text, size)?;

        let dx = match self.state.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -run.advance / 2.0,
            TextAlign::Right => -run.advance,
        };
        let v = font.vertical_metrics(size);
        let dy = match self.state.baseline {
            TextBaseline::Top => v.ascent,
            TextBaseline::Middle => (v.ascent + v.descent) / 2.0,
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Bottom => v.descent,
        };
        run.path
            .apply_affine(self.state.transform * Affine::translate(Vec2::new(dx as f64, dy as f64)));

        let Some(path) = to_skia_path(&run.path) else {
            return Ok(());
        };
        if stroke {
            let device = self.device_stroke();
            self.paint(&path, self.state.stroke, Some(&device));
        } else {
            self.paint(&path, self.state.fill, None);
        }
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("SkiaSurface: restore without matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform =
            self.state.transform * Affine::translate(Vec2::new(dx as f64, dy as f64));
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        if self.has_current_point() {
            self.path.line_to(p);
        } else {
            self.path.move_to(p);
        }
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let corners = [
            self.map(x, y),
            self.map(x + width, y),
            self.map(x + width, y + height),
            self.map(x, y + height),
        ];
        self.path.move_to(corners[0]);
        for corner in &corners[1..] {
            self.path.line_to(*corner);
        }
        self.path.close_path();
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        let (start, end) = (start as f64, end as f64);
        let sweep = if end - start >= TAU {
            TAU
        } else {
            (end - start).rem_euclid(TAU)
        };
        let arc = kurbo::Arc {
            center: Point::new(cx as f64, cy as f64),
            radii: Vec2::new(radius as f64, radius as f64),
            start_angle: start,
            sweep_angle: sweep,
            x_rotation: 0.0,
        };

        let start_point = self.state.transform * (arc.center + Vec2::from_angle(start) * arc.radii.x);
        if self.has_current_point() {
            self.path.line_to(start_point);
        } else {
            self.path.move_to(start_point);
        }
        for el in arc.append_iter(0.1) {
            self.path.push(self.state.transform * el);
        }
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn clip(&mut self) -> Result<(), SurfaceError> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let path = to_skia_path(&self.path);

        let mask = match (self.state.clip.take(), path) {
            (Some(mut mask), Some(path)) => {
                mask.intersect_path(&path, FillRule::Winding, true, Transform::identity());
                mask
            },
            (None, Some(path)) => {
                let mut mask = Mask::new(width, height)
                    .ok_or(SurfaceError::InvalidDimensions { width, height })?;
                mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
                mask
            },
            // An empty path clips everything away
            (_, None) => {
                Mask::new(width, height).ok_or(SurfaceError::InvalidDimensions { width, height })?
            },
        };
        self.state.clip = Some(mask);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.state.shadow = shadow;
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        if let Some(path) = to_skia_path(&self.path) {
            self.paint(&path, self.state.fill, None);
        }
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        if let Some(path) = to_skia_path(&self.path) {
            let device = self.device_stroke();
            self.paint(&path, self.state.stroke, Some(&device));
        }
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<(), SurfaceError> {
        let descriptor = FontDescriptor::parse(font)
            .map_err(|_| SurfaceError::InvalidDescriptor(font.to_string()))?;
        self.state.font = Some(descriptor);
        Ok(())
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn fill_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.paint_text(text, false)
    }

    fn stroke_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.paint_text(text, true)
    }
}

fn skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Translate a kurbo path into tiny-skia's format; `None` when it has no area
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
