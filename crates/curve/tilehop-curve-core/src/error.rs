use thiserror::Error;

/// Precondition violations surfaced by spline construction and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("spline needs 3N+1 control points with N >= 1, got {len}")]
    InvalidControlPointCount { len: usize },
    #[error("control point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}
