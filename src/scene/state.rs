//! Per-frame input and frame state snapshots.
//!
//! The core never reads ambient global state: a platform adapter owns the
//! event wiring and populates an [`InputState`] that is handed into every
//! update as part of the [`FrameState`].

use std::collections::BTreeSet;

use crate::foundation::core::Point;

/// Mouse position and button states.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseState {
    pub fn any_down(&self) -> bool {
        self.left || self.right || self.middle
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Keyboard and mouse snapshot for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputState {
    keys_down: BTreeSet<String>,
    pub mouse: MouseState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    /// Record a key press. Called by the platform adapter.
    pub fn press(&mut self, key: impl Into<String>) {
        self.keys_down.insert(key.into());
    }

    /// Record a key release. Called by the platform adapter.
    pub fn release(&mut self, key: &str) {
        self.keys_down.remove(key);
    }

    /// Clear all held keys and buttons, e.g. on focus loss.
    pub fn clear(&mut self) {
        self.keys_down.clear();
        self.mouse = MouseState::default();
    }
}

/// Everything an object may consult during its per-frame update.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    pub input: InputState,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Frame counter, incremented once per update cycle.
    pub frame: u64,
    /// Milliseconds elapsed since the previous frame.
    pub delta_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_tracking_round_trips() {
        let mut input = InputState::new();
        assert!(!input.key_down("a"));
        input.press("a");
        input.press("shift");
        assert!(input.key_down("a"));
        input.release("a");
        assert!(!input.key_down("a"));
        assert!(input.key_down("shift"));
        input.clear();
        assert!(!input.key_down("shift"));
    }

    #[test]
    fn mouse_any_down() {
        let mut m = MouseState::default();
        assert!(!m.any_down());
        m.middle = true;
        assert!(m.any_down());
    }
}
