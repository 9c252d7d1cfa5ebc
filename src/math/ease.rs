use std::f64::consts::TAU;

/// Linear interpolation from `a` toward `b` by `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quadratic jump arc: 0 at `t = 0` and `t = 1`, `height` at `t = 0.5`.
pub fn jump_arc(t: f64, height: f64) -> f64 {
    -4.0 * (t * (t - 1.0)) * height
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(10.0, 3.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 3.0, 1.0), 3.0);
        assert!((lerp(10.0, 3.0, 0.1) - 9.3).abs() < 1e-12);
    }

    #[test]
    fn test_jump_arc_shape() {
        assert_eq!(jump_arc(0.0, 10.0), 0.0);
        assert!(jump_arc(1.0, 10.0).abs() < 1e-12);
        assert!((jump_arc(0.5, 10.0) - 10.0).abs() < 1e-12);
        assert!((jump_arc(0.25, 10.0) - jump_arc(0.75, 10.0)).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!(wrap_angle(-1e-20) < TAU);
    }
}
