//! Scena is a small 2D scene-graph and canvas rendering toolkit.
//!
//! It turns a tree of scene objects (entities, particles, buttons, nested
//! groups) into a flat stream of drawing commands against an abstract
//! [`Surface`], once per display frame.
//!
//! # Frame pipeline
//!
//! 1. **Update**: `Stage + InputState -> mutated scene` (animations advance,
//!    particles age, expired objects are swept out)
//! 2. **Render**: `Stage -> Surface calls` (depth-first over the tree, each
//!    node drawing under its inherited transform)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rendering is read-only and repeatable; all mutation
//!   happens in the update sweep, which finishes before any render begins.
//! - **No IO in the frame loop**: asset fetching is front-loaded in
//!   [`AssetStore`]; surfaces only receive already-decoded data.
//! - **Straight-alpha RGBA8** color throughout ([`Rgba8`]).
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod entity;
pub mod foundation;
pub mod particle;
pub mod render;
pub mod scene;
pub mod shape;
pub mod transform;
pub mod ui;

pub use animation::ease::Ease;
pub use animation::keys::{Animation, Key, KeysGroup};
pub use assets::decode::{PreparedImage, decode_image};
pub use assets::store::{Asset, AssetSource, AssetStore};
pub use entity::Entity;
pub use foundation::core::{Canvas, Point, Rgba8, Vec2};
pub use foundation::error::{ScenaError, ScenaResult};
pub use particle::{Particle, Span};
pub use render::node::{NodeKind, Paint, RenderNode};
pub use render::recorder::{Recorder, SurfaceOp};
pub use render::surface::{Surface, TextAlign, TextBaseline, TextStyle};
pub use scene::group::{Group, SceneNode, SlotAction};
pub use scene::stage::{Camera, Stage};
pub use scene::state::{FrameState, InputState, MouseState};
pub use shape::Shape;
pub use transform::{Transform, TransformPatch};
pub use ui::{Button, ButtonEvent};
