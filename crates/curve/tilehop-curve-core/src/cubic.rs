//! Cubic Bezier basis evaluation, scalar and 3D.

use crate::vec3::Vec3;

/// Cubic Bezier basis function
#[inline]
pub fn cubic_scalar(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[inline]
pub fn cubic_scalar_derivative(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Point on the cubic through `p0..p3` at local parameter `t`.
#[inline]
pub fn point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    [
        cubic_scalar(p0[0], p1[0], p2[0], p3[0], t),
        cubic_scalar(p0[1], p1[1], p2[1], p3[1], t),
        cubic_scalar(p0[2], p1[2], p2[2], p3[2], t),
    ]
}

/// First derivative of the cubic at local parameter `t` (not normalized).
#[inline]
pub fn first_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    [
        cubic_scalar_derivative(p0[0], p1[0], p2[0], p3[0], t),
        cubic_scalar_derivative(p0[1], p1[1], p2[1], p3[1], t),
        cubic_scalar_derivative(p0[2], p1[2], p2[2], p3[2], t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_interpolated() {
        assert_eq!(cubic_scalar(2.0, 7.0, -3.0, 5.0, 0.0), 2.0);
        assert_eq!(cubic_scalar(2.0, 7.0, -3.0, 5.0, 1.0), 5.0);
    }

    #[test]
    fn evenly_spaced_controls_have_constant_derivative() {
        for t in [0.0, 0.25, 0.5, 1.0] {
            let d = cubic_scalar_derivative(0.0, 1.0, 2.0, 3.0, t);
            assert!((d - 3.0).abs() < 1e-6, "t={t} d={d}");
        }
    }
}
