//! Tilehop Animation Core (engine-agnostic)
//!
//! A single-threaded, tick-driven animation queue. Hosts own the transforms;
//! animation units receive the frame delta and a [`TransformHost`] on every
//! step and write position, rotation or scale of their target through it.
//!
//! - [`Animation`] is the steppable unit contract.
//! - [`Bounce`], [`Jump`], [`Turn`], [`Delay`] and [`Parallel`] are the units.
//! - [`Animator`] runs queued units one at a time in FIFO order.

pub mod animation;
pub mod animator;
pub mod bounce;
pub mod clock;
pub mod delay;
pub mod ids;
pub mod jump;
pub mod outputs;
pub mod parallel;
pub mod rotation;
pub mod transform;
pub mod turn;

// Re-exports for consumers (hosts)
pub use animation::Animation;
pub use animator::Animator;
pub use bounce::Bounce;
pub use clock::Clock;
pub use delay::Delay;
pub use ids::{AnimationId, IdAllocator};
pub use jump::{Jump, Landing};
pub use outputs::{AnimatorEvent, AnimatorOutputs};
pub use parallel::Parallel;
pub use rotation::Quat;
pub use transform::{TargetHandle, Transform, TransformHost, TransformStore};
pub use turn::Turn;
pub use tilehop_curve_core::{BezierEasing, Vec3};
