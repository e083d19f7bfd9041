//! Time-keyed value animation: easing curves, keyframe groups, and a small
//! play/stop/loop transport.

pub mod ease;
pub mod keys;
