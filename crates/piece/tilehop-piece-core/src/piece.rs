//! Piece controller.
//!
//! Queue layout for a hop: `Bounce(foot)` then `Parallel[Jump(body)]`. A
//! landing queues `Bounce(foot)` then a turn away from the camera. Camera
//! facing outside the queue runs as a separate rotation tween, at most one at
//! a time.

use std::cell::RefCell;
use std::rc::Rc;

use tilehop_animation_core::{
    rotation, Animation, AnimationId, Animator, Bounce, Jump, Landing, Parallel, Quat,
    TargetHandle, TransformHost, Turn, Vec3,
};
use tilehop_curve_core::vec3;

use crate::config::{PieceConfig, PieceData};
use crate::error::PieceError;
use crate::outputs::{ClipRequest, PieceEvent, PieceOutputs};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClipSource {
    Setup,
    Selection,
}

#[derive(Clone, Debug)]
struct ClipTimer {
    remaining: f32,
    request: ClipRequest,
    source: ClipSource,
}

pub struct Piece {
    body: TargetHandle,
    foot: TargetHandle,
    config: PieceConfig,
    data: PieceData,
    animator: Animator,
    rotation_tween: Option<Turn>,
    timers: Vec<ClipTimer>,
    // Raised between ticks, emitted on the next update.
    requests: Vec<PieceEvent>,
    landings: Rc<RefCell<Vec<Landing>>>,

    // Per-tick outputs
    outputs: PieceOutputs,
}

impl Piece {
    pub fn new(body: impl Into<TargetHandle>, config: PieceConfig) -> Self {
        let body = body.into();
        Self {
            foot: body.clone(),
            body,
            config,
            data: PieceData::default(),
            animator: Animator::new(),
            rotation_tween: None,
            timers: Vec::new(),
            requests: Vec::new(),
            landings: Rc::default(),
            outputs: PieceOutputs::default(),
        }
    }

    /// Squash-and-stretch target. Defaults to the body.
    pub fn with_foot(mut self, foot: impl Into<TargetHandle>) -> Self {
        self.foot = foot.into();
        self
    }

    pub fn with_data(mut self, data: PieceData) -> Self {
        self.data = data;
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn foot(&self) -> &str {
        &self.foot
    }

    pub fn config(&self) -> &PieceConfig {
        &self.config
    }

    pub fn data(&self) -> &PieceData {
        &self.data
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// True while hop or landing units are queued or running.
    pub fn is_busy(&self) -> bool {
        !self.animator.is_idle()
    }

    pub fn is_turning(&self) -> bool {
        self.rotation_tween.is_some()
    }

    /// Face the camera at once and request the idle clip after `idle_delay`.
    pub fn setup(
        &mut self,
        idle_delay: f32,
        camera: Vec3,
        yaw_offset: f32,
        host: &mut dyn TransformHost,
    ) -> Result<(), PieceError> {
        self.face_camera(true, camera, yaw_offset, host)?;
        self.timers.push(ClipTimer {
            remaining: idle_delay,
            request: ClipRequest::play("idle"),
            source: ClipSource::Setup,
        });
        Ok(())
    }

    pub fn update(&mut self, dt: f32, host: &mut dyn TransformHost) -> &PieceOutputs {
        self.outputs.clear();
        for event in self.requests.drain(..) {
            self.outputs.push_event(event);
        }

        let dt = dt.max(0.0);
        let mut due = Vec::new();
        self.timers.retain_mut(|timer| {
            timer.remaining -= dt;
            if timer.remaining <= 0.0 {
                due.push(timer.request.clone());
                false
            } else {
                true
            }
        });
        for request in due {
            log::debug!("piece '{}' requests clip '{}'", self.body, request.clip);
            self.outputs.push_event(PieceEvent::PlayClip(request));
        }

        if let Some(tween) = self.rotation_tween.as_mut() {
            tween.step(dt, host);
            if tween.is_done() {
                self.rotation_tween = None;
            }
        }

        for event in &self.animator.update(dt, host).events {
            self.outputs.push_event(PieceEvent::Animator(event.clone()));
        }

        for landing in self.landings.borrow_mut().drain(..) {
            self.outputs.push_event(PieceEvent::Landed {
                flag: landing.flag,
                position: landing.position,
            });
        }
        &self.outputs
    }

    /// Queue a hop to `destination`. `callback` runs once at touchdown.
    /// Returns the id of the jump group.
    pub fn jump_to(
        &mut self,
        destination: Vec3,
        flag: i32,
        callback: impl FnOnce(Landing) + 'static,
    ) -> AnimationId {
        let inbox = Rc::clone(&self.landings);
        let jump = Jump::new(self.body.clone(), destination, self.config.jump_duration)
            .with_easing(self.config.jump_easing)
            .with_height(self.config.jump_height)
            .with_flag(flag)
            .on_landed(move |landing| {
                inbox.borrow_mut().push(landing.clone());
                callback(landing);
            });

        self.animator
            .add(Bounce::new(self.foot.clone(), self.config.bounce_duration));
        let id = self.animator.add(Parallel::new().with(jump));
        log::debug!("piece '{}' hops to {destination:?} (flag {flag})", self.body);
        id
    }

    /// Queue the landing squash and a turn away from the camera.
    pub fn land(
        &mut self,
        camera: Vec3,
        host: &mut dyn TransformHost,
    ) -> Result<AnimationId, PieceError> {
        let away = self.facing(camera, true, host)?;
        self.rotation_tween = None;
        self.animator
            .add(Bounce::new(self.foot.clone(), self.config.bounce_duration));
        Ok(self.animator.add(Turn::with_speed(
            self.body.clone(),
            away,
            self.config.angular_speed,
        )))
    }

    /// Turn toward `camera` around the body's up axis, rotated by
    /// `yaw_offset` degrees. The offset applies to immediate facing as well
    /// as to the tweened turn.
    ///
    /// On error nothing is written and the current tween keeps running.
    pub fn face_camera(
        &mut self,
        immediate: bool,
        camera: Vec3,
        yaw_offset: f32,
        host: &mut dyn TransformHost,
    ) -> Result<(), PieceError> {
        let look = self.facing(camera, false, host)?;
        let target = rotation::mul(look, rotation::yaw_degrees(yaw_offset));

        if immediate {
            let tr = host
                .transform_mut(&self.body)
                .ok_or_else(|| PieceError::MissingTarget(self.body.clone()))?;
            tr.rotation = target;
            self.rotation_tween = None;
        } else {
            if self.rotation_tween.is_some() {
                log::trace!("piece '{}' replaces its rotation tween", self.body);
            }
            self.rotation_tween = Some(Turn::with_speed(
                self.body.clone(),
                target,
                self.config.angular_speed,
            ));
        }
        Ok(())
    }

    /// Turn toward the camera and request the jump clip after `jump_delay`,
    /// unless the tile is deselected first. Nothing is scheduled when the
    /// piece cannot face the camera.
    pub fn on_tile_selected(
        &mut self,
        camera: Vec3,
        yaw_offset: f32,
        jump_delay: f32,
        host: &mut dyn TransformHost,
    ) -> Result<(), PieceError> {
        self.face_camera(false, camera, yaw_offset, host)?;
        self.timers.push(ClipTimer {
            remaining: jump_delay,
            request: ClipRequest::crossfade("jump", self.config.clip_crossfade),
            source: ClipSource::Selection,
        });
        Ok(())
    }

    pub fn on_tile_deselected(&mut self) {
        let before = self.timers.len();
        self.timers.retain(|t| t.source != ClipSource::Selection);
        if self.timers.len() != before {
            log::debug!("piece '{}' cancelled its pending jump clip", self.body);
        }
        self.requests.push(PieceEvent::PlayClip(ClipRequest::crossfade(
            "idle",
            self.config.clip_crossfade,
        )));
    }

    /// Rotation looking at (or away from) `camera` in the body's horizontal
    /// plane.
    fn facing(
        &self,
        camera: Vec3,
        away: bool,
        host: &mut dyn TransformHost,
    ) -> Result<Quat, PieceError> {
        let tr = host
            .transform_mut(&self.body)
            .ok_or_else(|| PieceError::MissingTarget(self.body.clone()))?;
        let up = tr.up();
        let mut dir = vec3::sub(camera, tr.position);
        if away {
            dir = vec3::scale(dir, -1.0);
        }
        let dir = vec3::project_on_plane(dir, up);
        rotation::look_rotation(dir, up).ok_or_else(|| PieceError::DegenerateFacing {
            target: self.body.clone(),
            camera,
        })
    }
}
