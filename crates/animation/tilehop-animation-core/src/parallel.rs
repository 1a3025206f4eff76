//! Fan-out group: children share each tick's delta.

use crate::animation::Animation;
use crate::transform::TransformHost;

/// Steps every unfinished child with the same `dt`; done once all children are.
///
/// An empty group is done immediately. Children can only be added before the
/// group's first step.
#[derive(Default)]
pub struct Parallel {
    children: Vec<Box<dyn Animation>>,
    started: bool,
}

impl Parallel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Parallel::add`].
    pub fn with(mut self, unit: impl Animation + 'static) -> Self {
        self.add(unit);
        self
    }

    pub fn add(&mut self, unit: impl Animation + 'static) {
        if self.started {
            log::warn!("parallel group already running; dropping late child");
            return;
        }
        self.children.push(Box::new(unit));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl Animation for Parallel {
    fn step(&mut self, dt: f32, host: &mut dyn TransformHost) {
        self.started = true;
        for child in self.children.iter_mut().filter(|c| !c.is_done()) {
            child.step(dt, host);
        }
    }

    fn is_done(&self) -> bool {
        self.children.iter().all(|c| c.is_done())
    }
}
