//! Render nodes: drawable units that turn a transform into primitive surface
//! commands, optionally recursing into children.
//!
//! Each node owns its own [`Transform`], composed hierarchically onto the
//! transform passed into its render call with [`Transform::apply`]. This is
//! the mechanism behind nested visual offsets: a particle's render-local
//! transform layers on top of its logical transform this way.

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{ScenaError, ScenaResult};
use crate::render::surface::{Surface, TextStyle};
use crate::transform::Transform;

/// Paint attributes shared by every node kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paint {
    #[serde(default)]
    pub fill: Rgba8,
    #[serde(default)]
    pub stroke: Rgba8,
    /// A zero width suppresses stroking entirely.
    #[serde(default)]
    pub stroke_width: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: Rgba8::BLACK,
            stroke: Rgba8::BLACK,
            stroke_width: 0.0,
        }
    }
}

/// The drawable variants, collapsed into one tagged union.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    /// Filled (and optionally stroked) axis-aligned rectangle.
    Rect { w: f64, h: f64 },
    /// Filled (and optionally stroked) circle centered on the origin.
    Arc { radius: f64 },
    /// Stroked segment.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Closed filled/stroked polygon.
    Path(Vec<Point>),
    /// Anchored text run.
    Text { content: String, style: TextStyle },
    /// Named image asset drawn at natural size.
    Image { asset: String },
    /// Pure grouping node: no draws of its own, only a transform to nest
    /// children under.
    Group,
    /// Debug overlay: local axes and origin marker.
    Gizmo,
}

/// A drawable scene-graph leaf or interior node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderNode {
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub paint: Paint,
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    fn leaf(kind: NodeKind) -> Self {
        Self {
            transform: Transform::default(),
            paint: Paint::default(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn rect(w: f64, h: f64) -> ScenaResult<Self> {
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(ScenaError::construction(
                "rect node dimensions must be finite and > 0",
            ));
        }
        Ok(Self::leaf(NodeKind::Rect { w, h }))
    }

    pub fn arc(radius: f64) -> ScenaResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ScenaError::construction(
                "arc node radius must be finite and > 0",
            ));
        }
        Ok(Self::leaf(NodeKind::Arc { radius }))
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> ScenaResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(ScenaError::construction(
                "line node endpoints must be finite",
            ));
        }
        Ok(Self::leaf(NodeKind::Line { x1, y1, x2, y2 }))
    }

    pub fn path(points: Vec<Point>) -> ScenaResult<Self> {
        if points.len() < 2 {
            return Err(ScenaError::construction(
                "path node needs at least 2 points",
            ));
        }
        Ok(Self::leaf(NodeKind::Path(points)))
    }

    pub fn text(content: impl Into<String>, style: TextStyle) -> ScenaResult<Self> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return Err(ScenaError::construction(
                "text node size must be finite and > 0",
            ));
        }
        if style.font.trim().is_empty() {
            return Err(ScenaError::construction("text node font must be non-empty"));
        }
        Ok(Self::leaf(NodeKind::Text {
            content: content.into(),
            style,
        }))
    }

    pub fn image(asset: impl Into<String>) -> ScenaResult<Self> {
        let asset = asset.into();
        if asset.trim().is_empty() {
            return Err(ScenaError::construction(
                "image node asset name must be non-empty",
            ));
        }
        Ok(Self::leaf(NodeKind::Image { asset }))
    }

    pub fn group(children: Vec<RenderNode>) -> Self {
        Self {
            children,
            ..Self::leaf(NodeKind::Group)
        }
    }

    pub fn gizmo() -> Self {
        Self::leaf(NodeKind::Gizmo)
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_fill(mut self, fill: Rgba8) -> Self {
        self.paint.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Rgba8, width: f64) -> Self {
        self.paint.stroke = stroke;
        self.paint.stroke_width = width;
        self
    }

    pub fn with_children(mut self, children: Vec<RenderNode>) -> Self {
        self.children = children;
        self
    }

    /// Compose this node's transform onto `inherited`, issue the node's draw
    /// commands under a save/restore scope, then recurse into children with
    /// the composed transform.
    ///
    /// Sibling draws never observe each other's surface state: every
    /// primitive brackets its own state changes.
    pub fn render(&self, surface: &mut dyn Surface, inherited: &Transform) {
        let local = self.transform.apply(inherited);

        if !matches!(self.kind, NodeKind::Group) {
            surface.save();
            surface.translate(local.x, local.y);
            surface.rotate(local.rotation);
            surface.scale(local.scale_x, local.scale_y);
            self.draw(surface);
            surface.restore();
        }

        for child in &self.children {
            child.render(surface, &local);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let paint = &self.paint;
        match &self.kind {
            NodeKind::Rect { w, h } => {
                surface.set_fill(paint.fill);
                surface.fill_rect(*w, *h);
                if paint.stroke_width > 0.0 {
                    surface.set_stroke(paint.stroke);
                    surface.set_stroke_width(paint.stroke_width);
                    surface.stroke_rect(*w, *h);
                }
            }
            NodeKind::Arc { radius } => {
                surface.set_fill(paint.fill);
                surface.fill_circle(*radius);
                if paint.stroke_width > 0.0 {
                    surface.set_stroke(paint.stroke);
                    surface.set_stroke_width(paint.stroke_width);
                    surface.stroke_circle(*radius);
                }
            }
            NodeKind::Line { x1, y1, x2, y2 } => {
                surface.set_stroke(paint.stroke);
                surface.set_stroke_width(paint.stroke_width.max(1.0));
                surface.stroke_line(*x1, *y1, *x2, *y2);
            }
            NodeKind::Path(points) => {
                surface.set_fill(paint.fill);
                surface.fill_path(points);
                if paint.stroke_width > 0.0 {
                    surface.set_stroke(paint.stroke);
                    surface.set_stroke_width(paint.stroke_width);
                    surface.stroke_path(points);
                }
            }
            NodeKind::Text { content, style } => {
                surface.set_fill(paint.fill);
                surface.fill_text(content, style);
            }
            NodeKind::Image { asset } => {
                surface.draw_image(asset);
            }
            NodeKind::Group => {}
            NodeKind::Gizmo => {
                surface.set_stroke(Rgba8::rgb(200, 0, 0));
                surface.set_stroke_width(1.0);
                surface.stroke_line(0.0, 0.0, 20.0, 0.0);
                surface.set_stroke(Rgba8::rgb(0, 160, 0));
                surface.stroke_line(0.0, 0.0, 0.0, 20.0);
                surface.set_fill(Rgba8::BLACK);
                surface.fill_circle(3.0);
            }
        }
    }
}
