//! Tangency modes for spline anchors and the handle constraint they impose.
//!
//! Every anchor (control index `3k`) owns one mode slot. A control point at
//! index `i` maps to slot `(i + 1) / 3`, so an anchor and its two handles
//! share a slot. The first and last anchors have a single handle and are
//! never constrained.

use serde::{Deserialize, Serialize};

use crate::error::SplineError;
use crate::vec3::{self, Vec3};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlPointMode {
    /// Handles move independently.
    #[default]
    Free,
    /// Handles stay collinear through the anchor; lengths are independent.
    Aligned,
    /// Handles stay collinear and equally long.
    Mirrored,
}

/// Mode slot owning control point `index`.
#[inline]
pub fn mode_slot(index: usize) -> usize {
    (index + 1) / 3
}

/// Re-apply `mode` around the anchor owning control point `index`.
///
/// The handle on the same side as `index` is treated as the one the user just
/// placed and is kept; the opposite handle is rewritten. When `index` is the
/// anchor itself the left handle is kept.
pub fn enforce_mode(
    points: &mut [Vec3],
    index: usize,
    mode: ControlPointMode,
) -> Result<(), SplineError> {
    let len = points.len();
    if len < 4 || (len - 1) % 3 != 0 {
        return Err(SplineError::InvalidControlPointCount { len });
    }
    if index >= len {
        return Err(SplineError::IndexOutOfRange { index, len });
    }

    let slot = mode_slot(index);
    let last_slot = (len - 1) / 3;
    if mode == ControlPointMode::Free || slot == 0 || slot == last_slot {
        return Ok(());
    }

    let middle = slot * 3;
    let (fixed, enforced) = if index <= middle {
        (middle - 1, middle + 1)
    } else {
        (middle + 1, middle - 1)
    };

    let anchor = points[middle];
    let mut tangent = vec3::sub(anchor, points[fixed]);
    if mode == ControlPointMode::Aligned {
        let keep = vec3::distance(anchor, points[enforced]);
        tangent = vec3::scale(vec3::normalize(tangent), keep);
    }
    points[enforced] = vec3::add(anchor, tangent);
    log::trace!("enforced {mode:?} at anchor {middle}: handle {enforced} from {fixed}");
    Ok(())
}
