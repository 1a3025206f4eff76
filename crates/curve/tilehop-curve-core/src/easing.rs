//! Bezier timing curves (CSS `cubic-bezier` style).
//!
//! The curve runs from (0,0) to (1,1) with two free control points. Input
//! progress is read on the x axis, eased progress on the y axis. Inverting x
//! assumes x1/x2 in [0,1] so x is monotonic.

use serde::{Deserialize, Serialize};

use crate::cubic::{cubic_scalar, cubic_scalar_derivative};

const SOLVE_ITERATIONS: usize = 24;
const SOLVE_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierEasing {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Default for BezierEasing {
    fn default() -> Self {
        Self::EASE_IN_OUT
    }
}

impl BezierEasing {
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    /// Fast take-off, long soft landing. Used for piece jumps.
    pub const BLUEPRINT_1: Self = Self::new(0.3, 0.0, 0.2, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn is_linear(&self) -> bool {
        self.x1 == 0.0 && self.y1 == 0.0 && self.x2 == 1.0 && self.y2 == 1.0
    }

    /// Curve parameter whose x equals `x`. Newton steps inside a shrinking
    /// bracket; a step that leaves the bracket or meets a flat slope halves
    /// it instead.
    fn solve_x(&self, x: f32) -> f32 {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        let mut s = x;
        for _ in 0..SOLVE_ITERATIONS {
            let err = cubic_scalar(0.0, self.x1, self.x2, 1.0, s) - x;
            if err.abs() < SOLVE_EPS {
                break;
            }
            if err < 0.0 {
                lo = s;
            } else {
                hi = s;
            }
            let slope = cubic_scalar_derivative(0.0, self.x1, self.x2, 1.0, s);
            let next = s - err / slope;
            s = if slope.abs() > SOLVE_EPS && next > lo && next < hi {
                next
            } else {
                0.5 * (lo + hi)
            };
        }
        s
    }

    /// Eased progress for `t`, clamped into [0,1].
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if self.is_linear() {
            return t;
        }
        let s = self.solve_x(t);
        cubic_scalar(0.0, self.y1, self.y2, 1.0, s)
    }

    /// Eased progress together with d(eased)/dt.
    pub fn ease_with_derivative(&self, t: f32) -> (f32, f32) {
        let t = t.clamp(0.0, 1.0);
        if self.is_linear() {
            return (t, 1.0);
        }
        let s = self.solve_x(t);
        let eased = cubic_scalar(0.0, self.y1, self.y2, 1.0, s);
        let dx = cubic_scalar_derivative(0.0, self.x1, self.x2, 1.0, s);
        let dy = cubic_scalar_derivative(0.0, self.y1, self.y2, 1.0, s);
        let deriv = if dx.abs() > SOLVE_EPS { dy / dx } else { 0.0 };
        (eased, deriv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        for t in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(BezierEasing::LINEAR.ease(t), t);
        }
    }

    #[test]
    fn endpoints_hold_for_presets() {
        for e in [BezierEasing::EASE_IN_OUT, BezierEasing::BLUEPRINT_1] {
            assert!(e.ease(0.0).abs() < 1e-5);
            assert!((e.ease(1.0) - 1.0).abs() < 1e-5);
            assert!(e.ease(-3.0).abs() < 1e-5);
            assert!((e.ease(4.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_slow_at_start() {
        let e = BezierEasing::EASE_IN_OUT;
        assert!(e.ease(0.25) < 0.25);
        assert!((e.ease(0.5) - 0.5).abs() < 1e-4);
        assert!((e.ease(0.25) + e.ease(0.75) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn derivative_is_positive_mid_curve() {
        let (_, d) = BezierEasing::BLUEPRINT_1.ease_with_derivative(0.5);
        assert!(d > 0.0);
    }
}
