//! JSON Surface - When you need to see what the renderer really did
//!
//! Pixels hide the sequence that produced them. This surface paints nothing;
//! it records every call in order, checks that saves and restores balance,
//! and exports the log as JSON for debugging or golden-file tests.

use serde::{Deserialize, Serialize};
use textbox_core::{
    error::SurfaceError,
    types::{Color, Shadow, TextAlign, TextBaseline},
    FontDescriptor, Surface,
};
use thiserror::Error;

/// Schema version for JSON output format
pub const JSON_SCHEMA_VERSION: &str = "1.0";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Shadow parameters as recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonShadow {
    pub color: String,
    pub blur: f32,
    pub offset: [f32; 2],
    pub alpha: f32,
}

impl From<Shadow> for JsonShadow {
    fn from(s: Shadow) -> Self {
        Self {
            color: hex(s.color),
            blur: s.blur,
            offset: [s.offset_x, s.offset_y],
            alpha: s.alpha,
        }
    }
}

/// One surface call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceOp {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Arc { cx: f32, cy: f32, radius: f32, start: f32, end: f32 },
    ClosePath,
    Clip,
    FillColor { color: String },
    StrokeColor { color: String },
    LineWidth { width: f32 },
    Shadow { shadow: Option<JsonShadow> },
    Fill,
    Stroke,
    Font { font: String },
    TextBaseline { baseline: String },
    TextAlign { align: String },
    FillText { text: String },
    StrokeText { text: String },
}

/// Complete draw log in a debug-friendly format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Schema version for forward compatibility
    pub schema_version: String,
    pub ops: Vec<SurfaceOp>,
    /// Saves still open when the log was exported
    pub open_saves: usize,
    /// Restores that had no matching save
    pub unmatched_restores: usize,
}

/// The surface that turns draw calls into structured data
#[derive(Debug, Default)]
pub struct JsonSurface {
    ops: Vec<SurfaceOp>,
    depth: usize,
    max_depth: usize,
    unmatched_restores: usize,
}

impl JsonSurface {
    /// Creates a surface that speaks JSON instead of pixels
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Current save depth; zero when every save has been restored
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest save nesting seen so far
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.unmatched_restores == 0
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        log::debug!("JsonSurface: clearing {} recorded ops", self.ops.len());
        *self = Self::default();
    }

    pub fn output(&self) -> JsonOutput {
        JsonOutput {
            schema_version: JSON_SCHEMA_VERSION.to_string(),
            ops: self.ops.clone(),
            open_saves: self.depth,
            unmatched_restores: self.unmatched_restores,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(&self.output())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.output())?)
    }

    fn push(&mut self, op: SurfaceOp) {
        self.ops.push(op);
    }
}

fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

fn baseline_name(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "top",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Bottom => "bottom",
    }
}

fn align_name(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

impl Surface for JsonSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            log::warn!("JsonSurface: restore without matching save");
            self.unmatched_restores += 1;
        } else {
            self.depth -= 1;
        }
        self.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.push(SurfaceOp::Translate { dx, dy });
    }

    fn begin_path(&mut self) {
        self.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(SurfaceOp::LineTo { x, y });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(SurfaceOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        self.push(SurfaceOp::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.push(SurfaceOp::ClosePath);
    }

    fn clip(&mut self) -> Result<(), SurfaceError> {
        self.push(SurfaceOp::Clip);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.push(SurfaceOp::FillColor { color: hex(color) });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.push(SurfaceOp::StrokeColor { color: hex(color) });
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(SurfaceOp::LineWidth { width });
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.push(SurfaceOp::Shadow {
            shadow: shadow.map(JsonShadow::from),
        });
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.push(SurfaceOp::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.push(SurfaceOp::Stroke);
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<(), SurfaceError> {
        FontDescriptor::parse(font).map_err(|_| SurfaceError::InvalidDescriptor(font.into()))?;
        self.push(SurfaceOp::Font { font: font.into() });
        Ok(())
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(SurfaceOp::TextBaseline {
            baseline: baseline_name(baseline).into(),
        });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(SurfaceOp::TextAlign {
            align: align_name(align).into(),
        });
    }

    fn fill_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.push(SurfaceOp::FillText { text: text.into() });
        Ok(())
    }

    fn stroke_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.push(SurfaceOp::StrokeText { text: text.into() });
        Ok(())
    }
}
