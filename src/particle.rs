//! Particles: time-limited entities whose state is re-derived from an
//! interpolation between a start and an end configuration as age advances.
//!
//! Nothing accumulates frame to frame: every interpolated field is a pure
//! function of `age / max_life`, so a particle's visual state is exactly
//! reproducible for a given age.

use crate::animation::ease::Ease;
use crate::entity::Entity;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{ScenaError, ScenaResult};
use crate::scene::group::SlotAction;
use crate::transform::Transform;

/// A start/end pair for one interpolated quantity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span<T> {
    pub start: T,
    pub end: T,
}

impl<T> Span<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Clone> Span<T> {
    /// Constant span: start and end coincide.
    pub fn fixed(value: T) -> Self {
        Self {
            start: value.clone(),
            end: value,
        }
    }
}

/// A short-lived entity driven by interpolation over its lifetime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    pub entity: Entity,
    age: u32,
    max_life: u32,
    transform_span: Span<Transform>,
    render_span: Span<Transform>,
    color_span: Span<Rgba8>,
    #[serde(default)]
    pub ease: Ease,
}

impl Particle {
    /// Build a particle with explicit start/end states.
    ///
    /// `transform_span` drives the logical transform, `render_span` the
    /// render-local transform, `color_span` the fill color (all four
    /// channels 0-255). A zero lifetime is a construction error.
    pub fn new(
        entity: Entity,
        max_life: u32,
        transform_span: Span<Transform>,
        render_span: Span<Transform>,
        color_span: Span<Rgba8>,
        ease: Ease,
    ) -> ScenaResult<Self> {
        if max_life == 0 {
            return Err(ScenaError::construction("particle max_life must be > 0"));
        }
        let mut particle = Self {
            entity,
            age: 0,
            max_life,
            transform_span,
            render_span,
            color_span,
            ease,
        };
        // Start from the exact age-0 derivation.
        particle.derive(0.0);
        Ok(particle)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    /// Normalized age; exceeds 1 on the final (expiring) update.
    pub fn progress(&self) -> f64 {
        f64::from(self.age) / f64::from(self.max_life)
    }

    /// Advance one frame: increment age and re-derive every interpolated
    /// field from the new progress. Returns [`SlotAction::Remove`] once age
    /// exceeds the lifetime; the expiring frame is still fully derived, and
    /// the removal takes effect at the owning group's next traversal.
    pub fn update(&mut self) -> SlotAction {
        self.age += 1;
        self.derive(self.progress());
        if self.age > self.max_life {
            SlotAction::Remove
        } else {
            SlotAction::Keep
        }
    }

    fn derive(&mut self, progress: f64) {
        self.entity.transform = interpolate_transform(
            self.ease,
            progress,
            &self.transform_span.start,
            &self.transform_span.end,
        );
        self.entity.render.transform = interpolate_transform(
            self.ease,
            progress,
            &self.render_span.start,
            &self.render_span.end,
        );
        self.entity.render.paint.fill = Rgba8::lerp(
            self.color_span.start,
            self.color_span.end,
            self.ease.apply(progress),
        );
    }
}

fn interpolate_transform(ease: Ease, t: f64, start: &Transform, end: &Transform) -> Transform {
    Transform {
        x: ease.interpolate(t, start.x, end.x),
        y: ease.interpolate(t, start.y, end.y),
        scale_x: ease.interpolate(t, start.scale_x, end.scale_x),
        scale_y: ease.interpolate(t, start.scale_y, end.scale_y),
        rotation: ease.interpolate(t, start.rotation, end.rotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::RenderNode;
    use crate::shape::Shape;

    fn particle(max_life: u32) -> Particle {
        let entity = Entity::new(
            Shape::circle(1.0).unwrap(),
            Transform::default(),
            RenderNode::arc(1.0).unwrap(),
        );
        Particle::new(
            entity,
            max_life,
            Span::new(Transform::at(0.0, 0.0), Transform::at(100.0, 50.0)),
            Span::new(
                Transform::default(),
                Transform::default().with_scale(3.0).with_rotation(2.0),
            ),
            Span::new(Rgba8::rgba(0, 0, 0, 0), Rgba8::rgba(200, 100, 50, 255)),
            Ease::Linear,
        )
        .unwrap()
    }

    #[test]
    fn midpoint_is_exact_under_linear_interpolation() {
        let mut p = particle(10);
        for _ in 0..5 {
            assert_eq!(p.update(), SlotAction::Keep);
        }
        assert_eq!(p.progress(), 0.5);
        assert_eq!(p.entity.transform.x, 50.0);
        assert_eq!(p.entity.transform.y, 25.0);
        assert_eq!(p.entity.render.transform.scale_x, 2.0);
        assert_eq!(p.entity.render.transform.rotation, 1.0);
        assert_eq!(p.entity.render.paint.fill, Rgba8::rgba(100, 50, 25, 128));
    }

    #[test]
    fn removal_triggers_on_update_past_lifetime() {
        let mut p = particle(10);
        for i in 1..=10 {
            assert_eq!(p.update(), SlotAction::Keep, "update {i}");
        }
        // 11th update: age 11 > 10.
        assert_eq!(p.update(), SlotAction::Remove);
    }

    #[test]
    fn state_is_pure_function_of_age() {
        let mut a = particle(10);
        let mut b = particle(10);
        for _ in 0..7 {
            a.update();
        }
        for _ in 0..7 {
            b.update();
        }
        assert_eq!(a.entity.transform, b.entity.transform);
        assert_eq!(a.entity.render.paint.fill, b.entity.render.paint.fill);
    }

    #[test]
    fn zero_lifetime_is_rejected() {
        let entity = Entity::new(
            Shape::circle(1.0).unwrap(),
            Transform::default(),
            RenderNode::arc(1.0).unwrap(),
        );
        assert!(
            Particle::new(
                entity,
                0,
                Span::fixed(Transform::default()),
                Span::fixed(Transform::default()),
                Span::fixed(Rgba8::BLACK),
                Ease::Linear,
            )
            .is_err()
        );
    }
}
