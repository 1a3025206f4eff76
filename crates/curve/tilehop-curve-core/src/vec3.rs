//! Component-wise helpers over plain `[f32; 3]` vectors.

/// 3D vector (x, y, z).
pub type Vec3 = [f32; 3];

pub const ZERO: Vec3 = [0.0, 0.0, 0.0];
pub const ONE: Vec3 = [1.0, 1.0, 1.0];
pub const UP: Vec3 = [0.0, 1.0, 0.0];

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    length(sub(a, b))
}

/// Unit-length copy of `a`. A zero vector stays zero.
#[inline]
pub fn normalize(a: Vec3) -> Vec3 {
    let len2 = dot(a, a);
    if len2 > 0.0 {
        scale(a, len2.sqrt().recip())
    } else {
        ZERO
    }
}

#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Remove the component of `v` along `normal`, leaving its projection on the plane.
#[inline]
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    let n = normalize(normal);
    sub(v, scale(n, dot(v, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_zero() {
        assert_eq!(normalize(ZERO), ZERO);
        assert_eq!(normalize([0.0, 3.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn plane_projection_drops_normal_component() {
        let p = project_on_plane([1.0, 5.0, -2.0], UP);
        assert_eq!(p, [1.0, 0.0, -2.0]);
    }
}
