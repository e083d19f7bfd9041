/// Clamp `v` to `[min, max]`.
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.clamp(min, max)
}

/// Remap `v` from the range `[v_min, v_max]` to `[min, max]`.
///
/// The output is not clamped: values outside the input range extrapolate,
/// which is what keyframe lookup relies on at segment boundaries.
pub fn linear(v: f64, min: f64, max: f64, v_min: f64, v_max: f64) -> f64 {
    min + (max - min) * (v - v_min) / (v_max - v_min)
}

/// Linear interpolation of `t` in `[0, 1]` between `min` and `max`.
pub fn lerp(t: f64, min: f64, max: f64) -> f64 {
    min + (max - min) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_remaps_between_ranges() {
        assert_eq!(linear(5.0, 0.0, 100.0, 0.0, 10.0), 50.0);
        assert_eq!(linear(0.0, 0.0, 100.0, 0.0, 10.0), 0.0);
        assert_eq!(linear(10.0, 0.0, 100.0, 0.0, 10.0), 100.0);
    }

    #[test]
    fn linear_extrapolates_outside_input_range() {
        assert_eq!(linear(20.0, 0.0, 100.0, 0.0, 10.0), 200.0);
    }

    #[test]
    fn lerp_and_clamp_basics() {
        assert_eq!(lerp(0.25, 0.0, 8.0), 2.0);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }
}
