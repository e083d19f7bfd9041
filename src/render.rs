//! Drawable nodes and the surface they draw against.

pub mod node;
pub mod recorder;
pub mod surface;
