//! Minimal immediate-feedback UI widgets built from render nodes.

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::ScenaResult;
use crate::render::node::RenderNode;
use crate::render::surface::{Surface, TextStyle};
use crate::scene::state::FrameState;
use crate::shape::Shape;
use crate::transform::Transform;

/// Interaction reported by [`Button::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ButtonEvent {
    Clicked,
    HoverEnter,
    HoverExit,
}

/// A clickable labeled rectangle, centered on its transform position.
///
/// The button reports events from the input snapshot instead of invoking
/// stored callbacks, which keeps it plain serializable data; callers match
/// on the returned [`ButtonEvent`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Button {
    pub transform: Transform,
    w: f64,
    h: f64,
    background: RenderNode,
    label: RenderNode,
    hovered: bool,
    prev_left: bool,
}

impl Button {
    pub fn new(x: f64, y: f64, w: f64, h: f64, text: impl Into<String>) -> ScenaResult<Self> {
        let background = RenderNode::rect(w, h)?
            .with_transform(Transform::at(x - w / 2.0, y - h / 2.0))
            .with_fill(Rgba8::WHITE)
            .with_stroke(Rgba8::BLACK, 1.0);
        let label = RenderNode::text(
            text,
            TextStyle {
                size: 20.0,
                ..TextStyle::default()
            },
        )?
        .with_transform(Transform::at(x, y));
        Ok(Self {
            transform: Transform::at(x, y),
            w,
            h,
            background,
            label,
            hovered: false,
            prev_left: false,
        })
    }

    pub fn with_colors(mut self, fill: Rgba8, border: Rgba8, border_width: f64) -> Self {
        self.background.paint.fill = fill;
        self.background.paint.stroke = border;
        self.background.paint.stroke_width = border_width;
        self
    }

    /// Point containment against the centered rectangle.
    pub fn contains(&self, p: Point) -> bool {
        // Shift into the corner-anchored local frame of the hit rect.
        let local = Point::new(
            p.x - self.transform.x + self.w / 2.0,
            p.y - self.transform.y + self.h / 2.0,
        );
        match Shape::rect(self.w, self.h) {
            Ok(shape) => shape.contains(local),
            Err(_) => false,
        }
    }

    /// Consume hover and click transitions from the frame's input snapshot.
    /// A click is edge-triggered on the left button press while hovered.
    pub fn update(&mut self, state: &FrameState) -> Option<ButtonEvent> {
        let mouse = &state.input.mouse;
        let hover = self.contains(mouse.position());
        let clicked = hover && mouse.left && !self.prev_left;
        self.prev_left = mouse.left;

        let event = if clicked {
            Some(ButtonEvent::Clicked)
        } else if hover && !self.hovered {
            Some(ButtonEvent::HoverEnter)
        } else if !hover && self.hovered {
            Some(ButtonEvent::HoverExit)
        } else {
            None
        };
        self.hovered = hover;
        event
    }

    /// Draw background then label under the inherited transform.
    pub fn render(&self, surface: &mut dyn Surface, transform: &Transform) {
        self.background.render(surface, transform);
        self.label.render(surface, transform);
    }
}
