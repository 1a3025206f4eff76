//! Quaternion helpers (x, y, z, w) for turn animations.

use tilehop_curve_core::vec3::{self, Vec3};

pub type Quat = [f32; 4];

pub const IDENTITY: Quat = [0.0, 0.0, 0.0, 1.0];

#[inline]
fn dot4(a: Quat, b: Quat) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Unit-length copy of `q`; the zero quaternion is returned unchanged.
pub fn normalize(q: Quat) -> Quat {
    let len = dot4(q, q).sqrt();
    if len > 0.0 {
        q.map(|c| c / len)
    } else {
        q
    }
}

/// Blend `from` toward `to` by `t` along the shorter arc, renormalized.
pub fn nlerp(from: Quat, to: Quat, t: f32) -> Quat {
    let sign = if dot4(from, to) < 0.0 { -1.0 } else { 1.0 };
    normalize(std::array::from_fn(|i| from[i] + (sign * to[i] - from[i]) * t))
}

/// Hamilton product `a * b` (apply `b` first, then `a`).
#[inline]
pub fn mul(a: Quat, b: Quat) -> Quat {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

pub fn from_axis_angle(axis: Vec3, radians: f32) -> Quat {
    let axis = vec3::normalize(axis);
    let (s, c) = (radians * 0.5).sin_cos();
    [axis[0] * s, axis[1] * s, axis[2] * s, c]
}

/// Rotation about +y by `degrees`.
pub fn yaw_degrees(degrees: f32) -> Quat {
    from_axis_angle(vec3::UP, degrees.to_radians())
}

/// Rotate `v` by unit quaternion `q`.
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    let u = [q[0], q[1], q[2]];
    let w = q[3];
    let uv = vec3::cross(u, v);
    let uuv = vec3::cross(u, uv);
    vec3::add(v, vec3::add(vec3::scale(uv, 2.0 * w), vec3::scale(uuv, 2.0)))
}

/// Angle in degrees of the shortest rotation taking `a` to `b`.
pub fn angle_degrees(a: Quat, b: Quat) -> f32 {
    let d = dot4(normalize(a), normalize(b)).abs().min(1.0);
    (2.0 * d.acos()).to_degrees()
}

/// Rotation whose local +z points along `forward` with local +y as close to
/// `up` as possible. `None` when `forward` is zero or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let f = vec3::normalize(forward);
    let r = vec3::normalize(vec3::cross(up, f));
    if f == vec3::ZERO || r == vec3::ZERO {
        return None;
    }
    let u = vec3::cross(f, r);

    // Basis columns r, u, f.
    let (m00, m01, m02) = (r[0], u[0], f[0]);
    let (m10, m11, m12) = (r[1], u[1], f[1]);
    let (m20, m21, m22) = (r[2], u[2], f[2]);
    let trace = m00 + m11 + m22;

    let q = if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        [(m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s]
    } else if m00 > m11 && m00 > m22 {
        let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
        [0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s]
    } else if m11 > m22 {
        let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
        [(m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s]
    } else {
        let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
        [(m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s]
    };
    Some(normalize(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx3(a: Vec3, b: Vec3) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "left={a:?} right={b:?}");
        }
    }

    #[test]
    fn look_rotation_points_forward() {
        for dir in [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [-1.0, 0.0, 1.0], [0.3, 0.0, 0.2]] {
            let q = look_rotation(dir, vec3::UP).unwrap();
            approx3(rotate(q, [0.0, 0.0, 1.0]), vec3::normalize(dir));
            approx3(rotate(q, vec3::UP), vec3::UP);
        }
        assert!(look_rotation(vec3::UP, vec3::UP).is_none());
        assert!(look_rotation(vec3::ZERO, vec3::UP).is_none());
    }

    #[test]
    fn yaw_angle_round_trip() {
        let q = yaw_degrees(90.0);
        assert!((angle_degrees(IDENTITY, q) - 90.0).abs() < 1e-2);
        approx3(rotate(q, [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
        approx3(rotate(mul(q, q), [0.0, 0.0, 1.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn nlerp_takes_short_arc() {
        let a = yaw_degrees(10.0);
        let b = yaw_degrees(-10.0);
        let neg_b = [-b[0], -b[1], -b[2], -b[3]];
        let mid = nlerp(a, neg_b, 0.5);
        assert!(angle_degrees(mid, IDENTITY) < 0.1);
    }
}
