//! Stand-in collaborators for unit tests

use crate::error::{MetricsError, SurfaceError};
use crate::layout::TextMetrics;
use crate::traits::{MetricsProvider, Surface};
use crate::types::{Color, Shadow, TextAlign, TextBaseline};
use std::cell::{Cell, RefCell};

/// Reports the same size for any text
pub(crate) struct FixedMetrics {
    size: Option<TextMetrics>,
    reject: Option<char>,
    calls: Cell<usize>,
    last_font: RefCell<Option<String>>,
}

impl FixedMetrics {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self {
            size: Some(TextMetrics { width, height }),
            reject: None,
            calls: Cell::new(0),
            last_font: RefCell::new(None),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            size: None,
            reject: None,
            calls: Cell::new(0),
            last_font: RefCell::new(None),
        }
    }

    /// Fails only for text containing `ch`
    pub(crate) fn rejecting(width: f32, height: f32, ch: char) -> Self {
        Self {
            reject: Some(ch),
            ..Self::new(width, height)
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_font(&self) -> Option<String> {
        self.last_font.borrow().clone()
    }
}

impl MetricsProvider for FixedMetrics {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn measure(&self, font: &str, text: &str) -> Result<TextMetrics, MetricsError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_font.borrow_mut() = Some(font.to_string());
        if self.reject.is_some_and(|ch| text.contains(ch)) {
            return Err(MetricsError::Backend(format!("cannot measure {text:?}")));
        }
        self.size
            .ok_or_else(|| MetricsError::FontNotFound(font.to_string()))
    }
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Save,
    Restore,
    Translate(f32, f32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Rect(f32, f32, f32, f32),
    Arc(f32, f32, f32),
    ClosePath,
    Clip,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    Shadow(Option<Shadow>),
    Fill,
    Stroke,
    Font(String),
    Baseline(TextBaseline),
    Align(TextAlign),
    FillText(String),
    StrokeText(String),
}

/// Records every call; can be told to fail text painting
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub(crate) ops: Vec<Op>,
    pub(crate) depth: i32,
    pub(crate) fail_fill_text: bool,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub(crate) fn position(&self, op: &Op) -> Option<usize> {
        self.ops.iter().position(|o| o == op)
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(Op::Translate(dx, dy));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(Op::Rect(x, y, width, height));
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, _start: f32, _end: f32) {
        self.ops.push(Op::Arc(cx, cy, radius));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn clip(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(Op::Clip);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(Op::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.ops.push(Op::Shadow(shadow));
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(Op::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(Op::Stroke);
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<(), SurfaceError> {
        self.ops.push(Op::Font(font.to_string()));
        Ok(())
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.ops.push(Op::Baseline(baseline));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(Op::Align(align));
    }

    fn fill_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        if self.fail_fill_text {
            return Err(SurfaceError::MissingFont("test".to_string()));
        }
        self.ops.push(Op::FillText(text.to_string()));
        Ok(())
    }

    fn stroke_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.ops.push(Op::StrokeText(text.to_string()));
        Ok(())
    }
}
