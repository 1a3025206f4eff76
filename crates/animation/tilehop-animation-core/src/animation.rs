//! The steppable unit contract.

use crate::transform::TransformHost;

/// A self-contained timed effect advanced once per tick.
///
/// Contract:
/// - `step` adds `dt` (seconds, >= 0) to the unit's elapsed time and applies
///   its effect to its target through `host`.
/// - `is_done` is monotonic. Once it reports `true`, further `step` calls are
///   no-ops and completion callbacks never fire again.
/// - There is no cancel operation; dropping the unit stops it where it is.
pub trait Animation {
    fn step(&mut self, dt: f32, host: &mut dyn TransformHost);
    fn is_done(&self) -> bool;
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn step(&mut self, dt: f32, host: &mut dyn TransformHost) {
        (**self).step(dt, host)
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}
