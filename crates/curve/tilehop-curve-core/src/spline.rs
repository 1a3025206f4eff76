//! Piecewise cubic Bezier spline.
//!
//! Model:
//! - Control points form `N` cubic segments sharing end anchors, so a valid
//!   list always holds `3N + 1` points with `N >= 1`.
//! - A spline parameter `u` in [0,1] is mapped to segment `floor(u * N)` and the
//!   local parameter `frac(u * N)`. `u >= 1` is pinned to the last segment at
//!   `t = 1` so the end anchor is reachable without indexing past the list.
//! - Anchor modes constrain handles on edit only; evaluation ignores them.

use crate::cubic;
use crate::error::SplineError;
use crate::mode::{enforce_mode, mode_slot, ControlPointMode};
use crate::vec3::{self, Vec3};

/// One evenly spaced evaluation of a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineSample {
    pub u: f32,
    pub point: Vec3,
    pub direction: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BezierSpline {
    points: Vec<Vec3>,
    /// One entry per anchor.
    modes: Vec<ControlPointMode>,
}

impl Default for BezierSpline {
    /// A single straight segment along +x.
    fn default() -> Self {
        Self {
            points: vec![
                [1.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
                [3.0, 0.0, 0.0],
                [4.0, 0.0, 0.0],
            ],
            modes: vec![ControlPointMode::Free; 2],
        }
    }
}

impl BezierSpline {
    /// Build a spline from `3N + 1` control points. Every anchor starts `Free`.
    pub fn new(points: Vec<Vec3>) -> Result<Self, SplineError> {
        let len = points.len();
        if len < 4 || (len - 1) % 3 != 0 {
            return Err(SplineError::InvalidControlPointCount { len });
        }
        let modes = vec![ControlPointMode::Free; (len - 1) / 3 + 1];
        Ok(Self { points, modes })
    }

    #[inline]
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    fn check_index(&self, index: usize) -> Result<(), SplineError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    pub fn control_point(&self, index: usize) -> Result<Vec3, SplineError> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Move a control point. Moving an anchor drags both of its handles along,
    /// then the anchor's mode is re-applied.
    pub fn set_control_point(&mut self, index: usize, point: Vec3) -> Result<(), SplineError> {
        self.check_index(index)?;
        if index % 3 == 0 {
            let delta = vec3::sub(point, self.points[index]);
            if index > 0 {
                self.points[index - 1] = vec3::add(self.points[index - 1], delta);
            }
            if index + 1 < self.points.len() {
                self.points[index + 1] = vec3::add(self.points[index + 1], delta);
            }
        }
        self.points[index] = point;
        enforce_mode(&mut self.points, index, self.modes[mode_slot(index)])
    }

    pub fn control_point_mode(&self, index: usize) -> Result<ControlPointMode, SplineError> {
        self.check_index(index)?;
        Ok(self.modes[mode_slot(index)])
    }

    pub fn set_control_point_mode(
        &mut self,
        index: usize,
        mode: ControlPointMode,
    ) -> Result<(), SplineError> {
        self.check_index(index)?;
        self.modes[mode_slot(index)] = mode;
        log::debug!("control point {index} mode set to {mode:?}");
        enforce_mode(&mut self.points, index, mode)
    }

    /// Resolve `u` to (first control index of the segment, local t).
    fn segment(&self, u: f32) -> (usize, f32) {
        let curves = self.curve_count();
        if u >= 1.0 {
            return (self.points.len() - 4, 1.0);
        }
        let scaled = u.clamp(0.0, 1.0) * curves as f32;
        let i = (scaled.floor() as usize).min(curves - 1);
        (i * 3, scaled - i as f32)
    }

    /// Position on the spline at normalized parameter `u`.
    pub fn point(&self, u: f32) -> Vec3 {
        let (i, t) = self.segment(u);
        let p = &self.points[i..i + 4];
        cubic::point(p[0], p[1], p[2], p[3], t)
    }

    /// Un-normalized derivative at `u`, with respect to the segment's local parameter.
    pub fn velocity(&self, u: f32) -> Vec3 {
        let (i, t) = self.segment(u);
        let p = &self.points[i..i + 4];
        cubic::first_derivative(p[0], p[1], p[2], p[3], t)
    }

    /// Unit tangent at `u`.
    ///
    /// Where the derivative vanishes (all four points of the segment coincide,
    /// or a cusp) this is the zero vector; check [`Self::velocity`] first when
    /// that matters.
    pub fn direction(&self, u: f32) -> Vec3 {
        vec3::normalize(self.velocity(u))
    }

    /// Append one segment continuing along +x from the last anchor. The new
    /// anchor inherits the previous end anchor's mode.
    pub fn add_curve(&mut self) {
        let last = self.points[self.points.len() - 1];
        for step in 1..=3 {
            self.points.push(vec3::add(last, [step as f32, 0.0, 0.0]));
        }
        let last_mode = self.modes[self.modes.len() - 1];
        self.modes.push(last_mode);

        // The former end anchor now has two handles; its mode applies from here on.
        let former_end = self.points.len() - 4;
        if let Err(err) = enforce_mode(&mut self.points, former_end, last_mode) {
            log::warn!("add_curve: {err}");
        }
        log::debug!("spline grew to {} curves", self.curve_count());
    }

    /// `steps_per_curve * N + 1` evenly spaced samples from `u = 0` to `u = 1`.
    pub fn sample(&self, steps_per_curve: usize) -> Vec<SplineSample> {
        let steps = steps_per_curve.max(1) * self.curve_count();
        (0..=steps)
            .map(|k| {
                let u = k as f32 / steps as f32;
                SplineSample {
                    u,
                    point: self.point(u),
                    direction: self.direction(u),
                }
            })
            .collect()
    }
}
