//! Rotation tween toward a fixed orientation.

use crate::animation::Animation;
use crate::clock::Clock;
use crate::rotation::{self, Quat};
use crate::transform::{resolve, TargetHandle, TransformHost};

#[derive(Copy, Clone, Debug, PartialEq)]
enum Timing {
    Duration(f32),
    /// Degrees per second; duration is derived from the arc once the start
    /// rotation is known.
    AngularSpeed(f32),
}

impl Timing {
    /// Clock for a turn whose target is missing. A speed-based turn has no
    /// arc to measure, so it completes on its first step.
    fn targetless_clock(self) -> Clock {
        match self {
            Timing::Duration(d) => Clock::new(d),
            Timing::AngularSpeed(_) => Clock::new(0.0),
        }
    }
}

/// Rotates a target from its rotation at the first step to `to` (shortest
/// arc, NLERP).
#[derive(Clone, Debug)]
pub struct Turn {
    target: TargetHandle,
    to: Quat,
    from: Option<Quat>,
    timing: Timing,
    clock: Option<Clock>,
    missing_reported: bool,
}

impl Turn {
    pub fn new(target: impl Into<TargetHandle>, to: Quat, duration: f32) -> Self {
        Self::with_timing(target.into(), to, Timing::Duration(duration))
    }

    /// Turn at a constant `degrees_per_second`.
    pub fn with_speed(target: impl Into<TargetHandle>, to: Quat, degrees_per_second: f32) -> Self {
        Self::with_timing(target.into(), to, Timing::AngularSpeed(degrees_per_second))
    }

    fn with_timing(target: TargetHandle, to: Quat, timing: Timing) -> Self {
        Self {
            target,
            to: rotation::normalize(to),
            from: None,
            timing,
            clock: None,
            missing_reported: false,
        }
    }

    pub fn to(&self) -> Quat {
        self.to
    }

    /// Duration once known (always for fixed durations, after the first step
    /// for speed-based turns).
    pub fn duration(&self) -> Option<f32> {
        match (self.timing, &self.clock) {
            (_, Some(clock)) => Some(clock.duration()),
            (Timing::Duration(d), None) => Some(d.max(0.0)),
            (Timing::AngularSpeed(_), None) => None,
        }
    }

    fn start_clock(&self, from: Quat) -> Clock {
        match self.timing {
            Timing::Duration(d) => Clock::new(d),
            Timing::AngularSpeed(speed) if speed > 0.0 => {
                Clock::new(rotation::angle_degrees(from, self.to) / speed)
            }
            Timing::AngularSpeed(speed) => {
                log::warn!("turn of '{}' has non-positive speed {speed}; snapping", self.target);
                Clock::new(0.0)
            }
        }
    }
}

impl Animation for Turn {
    fn step(&mut self, dt: f32, host: &mut dyn TransformHost) {
        if self.is_done() {
            return;
        }
        let Some(tr) = resolve(host, &self.target, &mut self.missing_reported) else {
            // No target: run the clock out without writing.
            let clock = self.clock.get_or_insert_with(|| self.timing.targetless_clock());
            clock.advance(dt);
            return;
        };

        let from = *self.from.get_or_insert(tr.rotation);
        if self.clock.is_none() {
            self.clock = Some(self.start_clock(from));
        }
        let Some(t) = self.clock.as_mut().and_then(|clock| clock.advance(dt)) else {
            return;
        };
        tr.rotation = if t >= 1.0 {
            self.to
        } else {
            rotation::nlerp(from, self.to, t)
        };
    }

    fn is_done(&self) -> bool {
        self.clock.map_or(false, |clock| clock.is_done())
    }
}
