//! Scene graph: input snapshots, object groups, and the frame-driven stage.

pub mod group;
pub mod stage;
pub mod state;
