//! The stage: camera plus root object group, driven once per display frame.
//!
//! An external scheduler calls [`Stage::tick`] (or `update` then `render`)
//! once per refresh. Within a frame, every update, including deferred
//! self-removals, completes before any render begins, so a render never
//! observes a half-updated scene.

use crate::foundation::core::Canvas;
use crate::foundation::error::{ScenaError, ScenaResult};
use crate::render::surface::Surface;
use crate::scene::group::Group;
use crate::scene::state::{FrameState, InputState};
use crate::transform::Transform;

/// A movable view onto the scene: its transform is the root transform every
/// render sweep starts from.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    pub transform: Transform,
}

impl Camera {
    pub fn new(transform: Transform) -> Self {
        Self { transform }
    }

    /// A frame expressed in camera space (flat offset stacking).
    pub fn realize(&self, frame: &Transform) -> Transform {
        self.transform.add(frame)
    }
}

/// Root of the per-frame pipeline: owns the object tree and the camera.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    pub canvas: Canvas,
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub objects: Group,
    #[serde(default)]
    pub frame: u64,
    #[serde(default)]
    pub paused: bool,
}

impl Stage {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            camera: Camera::default(),
            objects: Group::new(),
            frame: 0,
            paused: false,
        }
    }

    /// Run the update sweep for one frame against the given input snapshot.
    #[tracing::instrument(level = "debug", skip(self, input), fields(frame = self.frame))]
    pub fn update(&mut self, input: &InputState, delta_ms: f64) {
        if self.paused {
            return;
        }
        self.frame += 1;
        let state = FrameState {
            input: input.clone(),
            width: self.canvas.width,
            height: self.canvas.height,
            frame: self.frame,
            delta_ms,
        };
        self.objects.update(&state);
    }

    /// Run the render sweep, rooted at the camera transform.
    #[tracing::instrument(level = "debug", skip(self, surface), fields(frame = self.frame))]
    pub fn render(&self, surface: &mut dyn Surface) {
        if self.paused {
            return;
        }
        self.objects.render(surface, &self.camera.transform);
    }

    /// One full frame: update strictly before render.
    pub fn tick(&mut self, input: &InputState, delta_ms: f64, surface: &mut dyn Surface) {
        self.update(input, delta_ms);
        self.render(surface);
    }

    /// Serialize the whole stage (camera, object tree, counters) to JSON.
    pub fn to_json(&self) -> ScenaResult<String> {
        serde_json::to_string(self).map_err(|e| ScenaError::construction(e.to_string()))
    }

    /// Rebuild a stage from [`Stage::to_json`] output.
    pub fn from_json(json: &str) -> ScenaResult<Self> {
        serde_json::from_str(json).map_err(|e| ScenaError::construction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::foundation::core::Rgba8;
    use crate::render::node::RenderNode;
    use crate::render::recorder::{Recorder, SurfaceOp};
    use crate::scene::group::SceneNode;
    use crate::shape::Shape;

    fn stage_with_entity() -> Stage {
        let mut stage = Stage::new(Canvas {
            width: 640,
            height: 360,
        });
        stage.objects.add(
            "hero",
            SceneNode::Entity(Entity::new(
                Shape::circle(5.0).unwrap(),
                Transform::at(10.0, 20.0),
                RenderNode::arc(5.0).unwrap().with_fill(Rgba8::WHITE),
            )),
        );
        stage
    }

    #[test]
    fn camera_transform_roots_the_render() {
        let mut stage = stage_with_entity();
        stage.camera.transform = Transform::at(-10.0, 0.0);
        let mut rec = Recorder::new();
        stage.render(&mut rec);
        assert_eq!(rec.ops()[1], SurfaceOp::Translate { x: 0.0, y: 20.0 });
    }

    #[test]
    fn paused_stage_neither_updates_nor_renders() {
        let mut stage = stage_with_entity();
        stage.paused = true;
        let input = InputState::new();
        let mut rec = Recorder::new();
        stage.tick(&input, 16.0, &mut rec);
        assert_eq!(stage.frame, 0);
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn tick_counts_frames() {
        let mut stage = stage_with_entity();
        let input = InputState::new();
        let mut rec = Recorder::new();
        stage.tick(&input, 16.0, &mut rec);
        stage.tick(&input, 16.0, &mut rec);
        assert_eq!(stage.frame, 2);
    }

    #[test]
    fn camera_realize_stacks_offsets() {
        let cam = Camera::new(Transform::at(5.0, 5.0));
        let world = cam.realize(&Transform::at(1.0, 2.0));
        assert_eq!(world, Transform::at(6.0, 7.0));
    }

    #[test]
    fn pipeline_runs_under_an_installed_subscriber() {
        // Install a fmt subscriber at debug level so the instrumented
        // update/render spans are exercised end to end, not just compiled.
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut stage = stage_with_entity();
        let mut rec = Recorder::new();
        stage.tick(&InputState::new(), 16.0, &mut rec);
        assert_eq!(stage.frame, 1);
        assert!(!rec.ops().is_empty());
    }

    #[test]
    fn json_round_trip_preserves_the_scene() {
        let stage = stage_with_entity();
        let json = stage.to_json().unwrap();
        let back = Stage::from_json(&json).unwrap();
        assert_eq!(back, stage);
    }
}
