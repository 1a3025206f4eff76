//! Tilehop Curve Core (engine-agnostic)
//!
//! Piecewise cubic Bezier splines with per-anchor tangency modes, the cubic
//! evaluation primitives they are built on, and CSS-style Bezier timing
//! curves used to ease animation progress.

pub mod cubic;
pub mod easing;
pub mod error;
pub mod mode;
pub mod spline;
pub mod vec3;

// Re-exports for consumers
pub use easing::BezierEasing;
pub use error::SplineError;
pub use mode::{enforce_mode, ControlPointMode};
pub use spline::{BezierSpline, SplineSample};
pub use vec3::Vec3;
