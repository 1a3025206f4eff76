//! Eased hop from the target's current position to a destination.

use std::fmt;

use tilehop_curve_core::vec3::{self, Vec3};
use tilehop_curve_core::BezierEasing;

use crate::animation::Animation;
use crate::clock::Clock;
use crate::transform::{resolve, TargetHandle, TransformHost};

/// Reported to the completion callback when a jump lands.
#[derive(Clone, Debug, PartialEq)]
pub struct Landing {
    /// Caller-supplied tag identifying the jump (e.g. a tile index).
    pub flag: i32,
    pub target: TargetHandle,
    pub position: Vec3,
}

type LandingCallback = Box<dyn FnOnce(Landing)>;

/// Moves a target along `lerp(start, destination, ease(t))` plus a parabolic
/// lift of `height * 4t(1-t)` along `up`.
///
/// `start` is read from the host on the first step, so a jump queued behind
/// other units departs from wherever the target is when it becomes active.
pub struct Jump {
    target: TargetHandle,
    destination: Vec3,
    start: Option<Vec3>,
    easing: BezierEasing,
    height: f32,
    up: Vec3,
    flag: i32,
    clock: Clock,
    on_landed: Option<LandingCallback>,
    missing_reported: bool,
}

impl Jump {
    pub fn new(target: impl Into<TargetHandle>, destination: Vec3, duration: f32) -> Self {
        Self {
            target: target.into(),
            destination,
            start: None,
            easing: BezierEasing::default(),
            height: 0.0,
            up: vec3::UP,
            flag: 0,
            clock: Clock::new(duration),
            on_landed: None,
            missing_reported: false,
        }
    }

    pub fn with_easing(mut self, easing: BezierEasing) -> Self {
        self.easing = easing;
        self
    }

    /// Peak lift above the straight line, reached at half progress.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = vec3::normalize(up);
        self
    }

    pub fn with_flag(mut self, flag: i32) -> Self {
        self.flag = flag;
        self
    }

    /// Called exactly once, at the end of the step that lands the jump.
    pub fn on_landed(mut self, callback: impl FnOnce(Landing) + 'static) -> Self {
        self.on_landed = Some(Box::new(callback));
        self
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    fn position_at(&self, start: Vec3, t: f32) -> Vec3 {
        if t >= 1.0 {
            return self.destination;
        }
        let ground = vec3::lerp(start, self.destination, self.easing.ease(t));
        let lift = 4.0 * self.height * t * (1.0 - t);
        vec3::add(ground, vec3::scale(self.up, lift))
    }
}

impl Animation for Jump {
    fn step(&mut self, dt: f32, host: &mut dyn TransformHost) {
        let Some(t) = self.clock.advance(dt) else {
            return;
        };
        if let Some(tr) = resolve(host, &self.target, &mut self.missing_reported) {
            let start = *self.start.get_or_insert(tr.position);
            tr.position = self.position_at(start, t);
        }

        if self.clock.is_done() {
            log::debug!("jump of '{}' landed (flag {})", self.target, self.flag);
            if let Some(callback) = self.on_landed.take() {
                callback(Landing {
                    flag: self.flag,
                    target: self.target.clone(),
                    position: self.destination,
                });
            }
        }
    }

    fn is_done(&self) -> bool {
        self.clock.is_done()
    }
}

impl fmt::Debug for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jump")
            .field("target", &self.target)
            .field("destination", &self.destination)
            .field("start", &self.start)
            .field("height", &self.height)
            .field("flag", &self.flag)
            .field("clock", &self.clock)
            .field("has_callback", &self.on_landed.is_some())
            .finish()
    }
}
