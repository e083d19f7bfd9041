//! A recording [`Surface`]: captures the draw-command stream as plain values.
//!
//! The recorded op list doubles as a backend-agnostic render IR that a
//! concrete backend can replay, and as the reference surface the unit tests
//! assert against.

use crate::foundation::core::{Point, Rgba8};
use crate::render::surface::{Surface, TextStyle};

/// One recorded surface command.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { radians: f64 },
    Scale { sx: f64, sy: f64 },
    SetFill(Rgba8),
    SetStroke(Rgba8),
    SetStrokeWidth(f64),
    FillRect { w: f64, h: f64 },
    StrokeRect { w: f64, h: f64 },
    FillCircle { radius: f64 },
    StrokeCircle { radius: f64 },
    StrokeLine { x1: f64, y1: f64, x2: f64, y2: f64 },
    FillPath(Vec<Point>),
    StrokePath(Vec<Point>),
    FillText { text: String, style: TextStyle },
    DrawImage { asset: String },
}

/// Surface implementation that appends every command to an op list.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<SurfaceOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in issue order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drop all recorded commands, e.g. between frames.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Consume the recorder and take the op list.
    pub fn into_ops(self) -> Vec<SurfaceOp> {
        self.ops
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::Translate { x, y });
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(SurfaceOp::Rotate { radians });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.ops.push(SurfaceOp::SetFill(color));
    }

    fn set_stroke(&mut self, color: Rgba8) {
        self.ops.push(SurfaceOp::SetStroke(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetStrokeWidth(width));
    }

    fn fill_rect(&mut self, w: f64, h: f64) {
        self.ops.push(SurfaceOp::FillRect { w, h });
    }

    fn stroke_rect(&mut self, w: f64, h: f64) {
        self.ops.push(SurfaceOp::StrokeRect { w, h });
    }

    fn fill_circle(&mut self, radius: f64) {
        self.ops.push(SurfaceOp::FillCircle { radius });
    }

    fn stroke_circle(&mut self, radius: f64) {
        self.ops.push(SurfaceOp::StrokeCircle { radius });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(SurfaceOp::StrokeLine { x1, y1, x2, y2 });
    }

    fn fill_path(&mut self, points: &[Point]) {
        self.ops.push(SurfaceOp::FillPath(points.to_vec()));
    }

    fn stroke_path(&mut self, points: &[Point]) {
        self.ops.push(SurfaceOp::StrokePath(points.to_vec()));
    }

    fn fill_text(&mut self, text: &str, style: &TextStyle) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, asset: &str) {
        self.ops.push(SurfaceOp::DrawImage {
            asset: asset.to_string(),
        });
    }
}
