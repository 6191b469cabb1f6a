//! Exponential smoothing helpers
//!
//! Every animated value in the engine chases its target with a per-frame
//! factor of `min(1, dt * speed)`. This is deliberately frame-rate dependent
//! (not a fixed-duration tween); convergence rates in tests rely on it.

use std::f32::consts::{PI, TAU};

/// Per-frame blend factor for exponential smoothing.
#[inline]
pub fn smoothing_factor(dt: f32, speed: f32) -> f32 {
    (dt * speed).min(1.0)
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Interpolate between two angles along the shortest arc.
#[inline]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let mut diff = (to - from) % TAU;
    if diff > PI {
        diff -= TAU;
    } else if diff < -PI {
        diff += TAU;
    }
    from + diff * t
}

/// Wrap an angle into (-π, π].
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_is_clamped_to_one() {
        assert_eq!(smoothing_factor(1.0, 60.0), 1.0);
        assert!((smoothing_factor(1.0 / 60.0, 12.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn lerp_angle_takes_short_way_round() {
        let a = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        // Halfway across the ±π seam, not through zero
        assert!((a.abs() - PI).abs() < 1e-4);
    }

    #[test]
    fn normalize_angle_range() {
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-5);
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((normalize_angle(-7.0) - (-7.0 + TAU)).abs() < 1e-5);
        assert_eq!(normalize_angle(f32::NAN), 0.0);
    }
}
