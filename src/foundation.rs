//! Shared primitives: geometry re-exports, colors, errors, scalar math.

pub mod core;
pub mod error;
pub mod math;
