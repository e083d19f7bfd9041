//! Keyframe groups and the animation transport driving them.

use crate::foundation::error::{ScenaError, ScenaResult};
use crate::foundation::math;

/// One `(time, value)` keyframe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Key {
    pub time: f64,
    pub value: f64,
}

impl Key {
    pub fn new(time: f64, value: f64) -> ScenaResult<Self> {
        if !time.is_finite() || !value.is_finite() {
            return Err(ScenaError::construction("key time and value must be finite"));
        }
        Ok(Self { time, value })
    }
}

/// An ordered-by-time sequence of keyframes with lookup-by-time.
///
/// The list is re-sorted (stably, ascending by time) after every insertion,
/// so lookups can always assume ordering.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeysGroup {
    keys: Vec<Key>,
}

impl KeysGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group from `(time, value)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> ScenaResult<Self> {
        let mut group = Self::new();
        for &(time, value) in pairs {
            group.insert(Key::new(time, value)?);
        }
        Ok(group)
    }

    /// Insert a key, keeping the list sorted ascending by time. Keys sharing
    /// a time keep their insertion order.
    pub fn insert(&mut self, key: Key) {
        self.keys.push(key);
        self.keys.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the last keyframe; zero for an empty group.
    pub fn duration(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Value at time `t`.
    ///
    /// Before the first key the first value holds; past the last key the
    /// last value holds; between two bracketing keys the value is the linear
    /// remap of `t` from `[prev.time, next.time]` onto the pair's value
    /// range. An empty group is an error, not a silent NaN.
    pub fn value_at(&self, t: f64) -> ScenaResult<f64> {
        if self.keys.is_empty() {
            return Err(ScenaError::animation("keys group is empty"));
        }

        let idx = self.keys.partition_point(|k| k.time <= t);
        if idx == 0 {
            return Ok(self.keys[0].value);
        }
        if idx == self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value);
        }

        let prev = self.keys[idx - 1];
        let next = self.keys[idx];
        Ok(math::linear(
            t,
            prev.value.min(next.value),
            prev.value.max(next.value),
            prev.time,
            next.time,
        ))
    }
}

/// Keyframe playback transport: play/stop with optional looping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    keys: KeysGroup,
    #[serde(default)]
    pub playing: bool,
    #[serde(default)]
    pub time: f64,
    pub speed: f64,
    #[serde(default)]
    pub looping: bool,
}

impl Animation {
    /// Wrap a non-empty keys group. `speed` is time advanced per update.
    pub fn new(keys: KeysGroup, speed: f64, looping: bool) -> ScenaResult<Self> {
        if keys.is_empty() {
            return Err(ScenaError::animation(
                "animation requires at least one keyframe",
            ));
        }
        if !speed.is_finite() {
            return Err(ScenaError::construction("animation speed must be finite"));
        }
        Ok(Self {
            keys,
            playing: false,
            time: 0.0,
            speed,
            looping,
        })
    }

    pub fn keys(&self) -> &KeysGroup {
        &self.keys
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop playback and rewind to the start. Synchronous and immediate.
    pub fn stop(&mut self) {
        self.playing = false;
        self.time = 0.0;
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Advance the transport by `speed` (or `speed_override`) while playing.
    /// Past the last keyframe's time the transport wraps to 0 when looping,
    /// otherwise it resets and stops.
    pub fn update(&mut self, speed_override: Option<f64>) {
        if !self.playing {
            return;
        }
        self.time += speed_override.unwrap_or(self.speed);
        if self.time > self.keys.duration() {
            self.time = 0.0;
            if !self.looping {
                self.playing = false;
            }
        }
    }

    /// Sample the keys at the transport time while playing, else at 0.
    pub fn current_value(&self) -> ScenaResult<f64> {
        let t = if self.playing { self.time } else { 0.0 };
        self.keys.value_at(t)
    }
}
