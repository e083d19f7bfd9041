//! Entities couple a hit-testing shape, a logical transform, and a render
//! node into one positionable, drawable object.

use crate::foundation::core::Point;
use crate::render::node::RenderNode;
use crate::render::surface::Surface;
use crate::shape::Shape;
use crate::transform::Transform;

/// A positionable, hit-testable, drawable object.
///
/// The entity's transform is its logical/world frame; the render node keeps
/// its own transform for render-local offsets layered on top of it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    pub shape: Shape,
    #[serde(default)]
    pub transform: Transform,
    pub render: RenderNode,
}

impl Entity {
    pub fn new(shape: Shape, transform: Transform, render: RenderNode) -> Self {
        Self {
            shape,
            transform,
            render,
        }
    }

    /// The entity's frame expressed inside `parent`.
    pub fn resolve_transform(&self, parent: &Transform) -> Transform {
        self.transform.apply(parent)
    }

    /// Delegate to the render node with the resolved frame; the node then
    /// composes its own render-local transform on top.
    pub fn render(&self, surface: &mut dyn Surface, parent: &Transform) {
        self.render.render(surface, &self.resolve_transform(parent));
    }

    /// Point containment. The query point is translated into the shape's
    /// local frame before delegating.
    pub fn contains(&self, p: Point) -> bool {
        self.shape
            .contains(Point::new(p.x - self.transform.x, p.y - self.transform.y))
    }

    /// Circle-radius proximity test: positions closer than the sum of the
    /// two shapes' bounding radii.
    pub fn intersects(&self, other: &Entity) -> bool {
        self.transform.distance(&other.transform)
            < self.shape.bounding_radius() + other.shape.bounding_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{Recorder, SurfaceOp};

    fn circle_entity(x: f64, y: f64, r: f64) -> Entity {
        Entity::new(
            Shape::circle(r).unwrap(),
            Transform::at(x, y),
            RenderNode::arc(r).unwrap(),
        )
    }

    #[test]
    fn contains_translates_into_local_frame() {
        let e = Entity::new(
            Shape::rect(10.0, 10.0).unwrap(),
            Transform::at(100.0, 100.0),
            RenderNode::rect(10.0, 10.0).unwrap(),
        );
        assert!(e.contains(Point::new(105.0, 105.0)));
        assert!(!e.contains(Point::new(5.0, 5.0)));
        assert!(!e.contains(Point::new(115.0, 105.0)));
    }

    #[test]
    fn intersects_sums_bounding_radii() {
        let a = circle_entity(0.0, 0.0, 3.0);
        let b = circle_entity(4.0, 0.0, 2.0);
        let c = circle_entity(6.0, 0.0, 0.5);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn render_resolves_parent_then_node_transform() {
        let mut e = circle_entity(10.0, 0.0, 1.0);
        // Render-local offset on top of the logical frame.
        e.render.transform = Transform::at(0.0, 5.0);
        let mut rec = Recorder::new();
        e.render(&mut rec, &Transform::at(100.0, 0.0));
        assert_eq!(rec.ops()[1], SurfaceOp::Translate { x: 110.0, y: 5.0 });
    }
}
