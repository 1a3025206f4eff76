//! Squash-and-stretch pulse on a target's local scale.

use std::f32::consts::TAU;

use tilehop_curve_core::vec3::Vec3;

use crate::animation::Animation;
use crate::clock::Clock;
use crate::transform::{resolve, TargetHandle, TransformHost};

/// Peak scale deviation of a bounce.
pub const DEFAULT_OFFSET: f32 = 0.3;

const HALF_PHASE_VERTICAL: f32 = 0.5;
const HALF_PHASE_LATERAL: f32 = 0.25;
const FULL_PHASE_LATERAL: f32 = 0.35;

/// One bounce over `duration` seconds.
///
/// The phase angle sweeps `0..2π` over the duration. Half phase (the default)
/// squashes once: y dips to `1 - offset` at the midpoint while x/z bulge.
/// Full phase runs a whole sine: squash then stretch. Both start and end on
/// the rest pose (1,1,1).
#[derive(Clone, Debug)]
pub struct Bounce {
    target: TargetHandle,
    clock: Clock,
    offset: f32,
    full_phase: bool,
    missing_reported: bool,
}

impl Bounce {
    pub fn new(target: impl Into<TargetHandle>, duration: f32) -> Self {
        Self {
            target: target.into(),
            clock: Clock::new(duration),
            offset: DEFAULT_OFFSET,
            full_phase: false,
            missing_reported: false,
        }
    }

    pub fn full_phase(mut self, full_phase: bool) -> Self {
        self.full_phase = full_phase;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Scale at normalized progress `t`.
    pub fn scale_at(&self, t: f32) -> Vec3 {
        let angle = TAU * t.clamp(0.0, 1.0);
        if self.full_phase {
            let s = angle.sin();
            let lateral = 1.0 + s * self.offset * FULL_PHASE_LATERAL;
            [lateral, 1.0 - s * self.offset, lateral]
        } else {
            // cos measured from rest: 0 at both ends, -2 at the midpoint
            let c = angle.cos() - 1.0;
            let lateral = 1.0 - c * self.offset * HALF_PHASE_LATERAL;
            [lateral, 1.0 + c * self.offset * HALF_PHASE_VERTICAL, lateral]
        }
    }
}

impl Animation for Bounce {
    fn step(&mut self, dt: f32, host: &mut dyn TransformHost) {
        let Some(t) = self.clock.advance(dt) else {
            return;
        };
        let scale = self.scale_at(t);
        if let Some(tr) = resolve(host, &self.target, &mut self.missing_reported) {
            tr.scale = scale;
        }
        if self.clock.is_done() {
            log::trace!("bounce on '{}' done", self.target);
        }
    }

    fn is_done(&self) -> bool {
        self.clock.is_done()
    }
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
    fn half_phase_squashes_at_midpoint() {
        let b = Bounce::new("foot", 0.15);
        approx3(b.scale_at(0.0), [1.0, 1.0, 1.0]);
        approx3(b.scale_at(0.5), [1.15, 0.7, 1.15]);
        approx3(b.scale_at(1.0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn full_phase_squashes_then_stretches() {
        let b = Bounce::new("foot", 0.15).full_phase(true);
        approx3(b.scale_at(0.25), [1.105, 0.7, 1.105]);
        approx3(b.scale_at(0.75), [0.895, 1.3, 0.895]);
        approx3(b.scale_at(1.0), [1.0, 1.0, 1.0]);
    }
}
