//! 2D coordinate frames: position, non-uniform scale, rotation.
//!
//! Two composition flavors exist and are deliberately distinct:
//!
//! - [`Transform::add`] is flat offset stacking: translations add, scales
//!   multiply, rotations add. Commutative; the accumulated rotation never
//!   rotates the translation component.
//! - [`Transform::apply`] is hierarchical nesting (child into parent frame):
//!   the child's position is scaled by the parent scale, rotated by the
//!   parent rotation, then translated by the parent position. Not
//!   commutative; always call it on the child with the parent as argument.
//!
//! `Transform` is `Copy`, so every composition operates on a fresh value and
//! never aliases its inputs.

use crate::foundation::core::Affine;

fn default_scale() -> f64 {
    1.0
}

/// One coordinate frame relative to another: position, non-uniform scale,
/// rotation in radians. The default value is the identity frame.
///
/// Missing fields in serialized form deserialize to the identity (0 for
/// position and rotation, 1 for scale).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    /// Radians, counter-clockwise.
    #[serde(default)]
    pub rotation: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }
}

/// Field-wise overrides for [`Transform::clone_with`]. `None` keeps the
/// source field, including zero values.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct TransformPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub rotation: Option<f64>,
}

impl Transform {
    /// Identity frame positioned at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Set both scale factors at once.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale_x = scale;
        self.scale_y = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Flat accumulation: position adds, scale multiplies component-wise,
    /// rotation adds. Commutative and associative; suitable for stacking
    /// plain offsets where no field should influence another.
    pub fn add(mut self, other: &Transform) -> Self {
        self.x += other.x;
        self.y += other.y;
        self.scale_x *= other.scale_x;
        self.scale_y *= other.scale_y;
        self.rotation += other.rotation;
        self
    }

    /// Inverse of [`Transform::add`].
    pub fn sub(mut self, other: &Transform) -> Self {
        self.x -= other.x;
        self.y -= other.y;
        self.scale_x /= other.scale_x;
        self.scale_y /= other.scale_y;
        self.rotation -= other.rotation;
        self
    }

    /// Hierarchical composition: express this local frame inside `parent`.
    ///
    /// The local position is scaled by the parent scale, rotated by the
    /// parent rotation (when nonzero) together with the accumulated
    /// rotation, then translated by the parent position. `apply` with the
    /// identity on either side is a no-op on the other operand; with two
    /// non-identity frames it is order-sensitive.
    pub fn apply(mut self, parent: &Transform) -> Self {
        self.x *= parent.scale_x;
        self.y *= parent.scale_y;
        self.scale_x *= parent.scale_x;
        self.scale_y *= parent.scale_y;
        if parent.rotation != 0.0 {
            let (sin, cos) = parent.rotation.sin_cos();
            let (x, y) = (self.x, self.y);
            self.x = x * cos - y * sin;
            self.y = x * sin + y * cos;
            self.rotation += parent.rotation;
        }
        self.x += parent.x;
        self.y += parent.y;
        self
    }

    /// Rotate the position (treated as relative to the pivot point) by the
    /// pivot's rotation, and accumulate that rotation.
    ///
    /// Both output coordinates read the pre-rotation position; neither is
    /// computed from an already rotated coordinate.
    pub fn rotate_around(mut self, pivot: &Transform) -> Self {
        let (sin, cos) = pivot.rotation.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = pivot.x + x * cos - y * sin;
        self.y = pivot.y + x * sin + y * cos;
        self.rotation += pivot.rotation;
        self
    }

    /// Displace along the current rotation heading.
    pub fn move_forward(mut self, distance: f64) -> Self {
        self.x += distance * self.rotation.cos();
        self.y += distance * self.rotation.sin();
        self
    }

    pub fn move_backward(self, distance: f64) -> Self {
        self.move_forward(-distance)
    }

    /// Displace perpendicular to the heading, toward negative y at zero
    /// rotation (screen-space "left").
    pub fn move_left(mut self, distance: f64) -> Self {
        self.x += distance * self.rotation.sin();
        self.y -= distance * self.rotation.cos();
        self
    }

    pub fn move_right(self, distance: f64) -> Self {
        self.move_left(-distance)
    }

    /// Copy with field-wise overrides. The result never aliases `self`.
    pub fn clone_with(&self, patch: &TransformPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            scale_x: patch.scale_x.unwrap_or(self.scale_x),
            scale_y: patch.scale_y.unwrap_or(self.scale_y),
            rotation: patch.rotation.unwrap_or(self.rotation),
        }
    }

    /// Euclidean distance between positions. Scale and rotation are ignored.
    pub fn distance(&self, other: &Transform) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Overwrite every field from `other`.
    pub fn set(&mut self, other: &Transform) {
        *self = *other;
    }

    /// Equivalent affine map in draw order: translate, then rotate, then
    /// scale. Matches the order render nodes issue surface commands in.
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.x, self.y))
            * Affine::rotate(self.rotation)
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} !~ {b}");
    }

    #[test]
    fn default_is_identity_for_apply() {
        let id = Transform::default();
        let p = Transform {
            x: 3.0,
            y: -2.0,
            scale_x: 2.0,
            scale_y: 0.5,
            rotation: 1.2,
        };
        assert_eq!(id.apply(&p), p);
        assert_eq!(p.apply(&id), p);
    }

    #[test]
    fn apply_is_not_commutative() {
        let parent = Transform {
            x: 10.0,
            y: 0.0,
            scale_x: 2.0,
            scale_y: 2.0,
            rotation: FRAC_PI_2,
        };
        let child = Transform::at(5.0, 0.0);
        assert_ne!(child.apply(&parent), parent.apply(&child));
    }

    #[test]
    fn apply_nests_scale_then_rotation_then_translation() {
        let parent = Transform {
            x: 100.0,
            y: 50.0,
            scale_x: 2.0,
            scale_y: 2.0,
            rotation: FRAC_PI_2,
        };
        // Child sits 5 units along the parent's local x axis.
        let world = Transform::at(5.0, 0.0).apply(&parent);
        // Scaled to 10, rotated onto +y, then offset by the parent position.
        assert_close(world.x, 100.0);
        assert_close(world.y, 60.0);
        assert_close(world.rotation, FRAC_PI_2);
        assert_close(world.scale_x, 2.0);
    }

    #[test]
    fn add_is_commutative() {
        let a = Transform {
            x: 1.0,
            y: 2.0,
            scale_x: 2.0,
            scale_y: 3.0,
            rotation: 0.5,
        };
        let b = Transform {
            x: -4.0,
            y: 0.25,
            scale_x: 0.5,
            scale_y: 4.0,
            rotation: -1.5,
        };
        assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn add_is_associative() {
        let a = Transform {
            x: 1.0,
            y: 2.0,
            scale_x: 2.0,
            scale_y: 3.0,
            rotation: 0.5,
        };
        let b = Transform {
            x: -4.0,
            y: 0.25,
            scale_x: 0.5,
            scale_y: 4.0,
            rotation: -1.5,
        };
        let c = Transform {
            x: 7.0,
            y: -3.0,
            scale_x: 4.0,
            scale_y: 0.25,
            rotation: 2.0,
        };
        assert_eq!(a.add(&b.add(&c)), a.add(&b).add(&c));
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = Transform {
            x: 1.0,
            y: 2.0,
            scale_x: 2.0,
            scale_y: 4.0,
            rotation: 0.5,
        };
        let b = Transform {
            x: 3.0,
            y: -1.0,
            scale_x: 0.5,
            scale_y: 2.0,
            rotation: 0.25,
        };
        let back = a.add(&b).sub(&b);
        assert_close(back.x, a.x);
        assert_close(back.y, a.y);
        assert_close(back.scale_x, a.scale_x);
        assert_close(back.scale_y, a.scale_y);
        assert_close(back.rotation, a.rotation);
    }

    #[test]
    fn rotate_around_quarter_turn() {
        // Position relative to the pivot is (1, 0); a quarter turn must land
        // it on (0, 1) relative to the pivot, with both coordinates computed
        // from the pre-rotation position.
        let pivot = Transform {
            x: 10.0,
            y: 20.0,
            rotation: FRAC_PI_2,
            ..Transform::default()
        };
        let t = Transform::at(1.0, 0.0).rotate_around(&pivot);
        assert_close(t.x, 10.0);
        assert_close(t.y, 21.0);
        assert_close(t.rotation, FRAC_PI_2);
    }

    #[test]
    fn movement_follows_heading() {
        let t = Transform::default().with_rotation(PI).move_forward(10.0);
        assert_close(t.x, -10.0);
        assert_close(t.y, 0.0);

        let t = Transform::default().move_left(4.0);
        assert_close(t.x, 0.0);
        assert_close(t.y, -4.0);

        let t = Transform::default().move_backward(3.0);
        assert_close(t.x, -3.0);
    }

    #[test]
    fn clone_with_overrides_and_never_aliases() {
        let src = Transform {
            x: 1.0,
            y: 2.0,
            scale_x: 3.0,
            scale_y: 4.0,
            rotation: 5.0,
        };
        let mut copy = src.clone_with(&TransformPatch {
            x: Some(0.0),
            ..TransformPatch::default()
        });
        // A zero override must win over the source field.
        assert_eq!(copy.x, 0.0);
        assert_eq!(copy.y, src.y);
        copy.y = 99.0;
        assert_eq!(src.y, 2.0);
    }

    #[test]
    fn exact_equality_and_distance() {
        let a = Transform::at(0.0, 0.0);
        let b = Transform::at(3.0, 4.0).with_scale(7.0);
        assert_eq!(a, a.clone_with(&TransformPatch::default()));
        assert_ne!(a, b);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn missing_serde_fields_default_to_identity() {
        let t: Transform = serde_json::from_str(r#"{"x": 2.0}"#).unwrap();
        assert_eq!(t, Transform::at(2.0, 0.0));
    }
}
