//! Final-sample rest classification

use super::states::Trajectory;

/// Threshold below which both |x| and |v| count as settled
pub const REST_TOLERANCE: f64 = 0.001;

/// True iff the final sample has both |x| and |v| under [`REST_TOLERANCE`]
///
/// Only the last sample is examined; an empty trajectory is never at rest
pub fn is_at_rest(traj: &Trajectory) -> bool {
    traj.last()
        .map_or(false, |s| s.x.abs() < REST_TOLERANCE && s.v.abs() < REST_TOLERANCE)
}
