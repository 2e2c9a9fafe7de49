//! Verification rule - decides from reaction counts whether a campaign needs review
//!
//! A campaign is flagged when "expired" reports outnumber "still works"
//! reports by more than 1.5 to 1. "Info incorrect" reports are counted in the
//! stats but take no part in the decision.

use crate::entities::ReactionStats;

/// Expired-to-still-works ratio above which a campaign is flagged, as `NUM / DEN`
pub const EXPIRED_RATIO_NUM: i64 = 3;
pub const EXPIRED_RATIO_DEN: i64 = 2;

/// Evaluate the verification rule
///
/// Returns `false` when there are no reactions. Otherwise returns `true` iff
/// `expired > still_works * 1.5`, strictly. Compared as
/// `expired * 2 > still_works * 3` so the boundary is exact.
pub fn needs_verification(stats: &ReactionStats) -> bool {
    if stats.is_empty() {
        return false;
    }
    stats.expired() * EXPIRED_RATIO_DEN > stats.still_works() * EXPIRED_RATIO_NUM
}

/// Change of the cached flag produced by a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagTransition {
    Raised,
    Cleared,
    Unchanged,
}

impl FlagTransition {
    pub fn between(previous: bool, next: bool) -> Self {
        match (previous, next) {
            (false, true) => Self::Raised,
            (true, false) => Self::Cleared,
            _ => Self::Unchanged,
        }
    }

    #[inline]
    pub fn is_change(self) -> bool {
        self != Self::Unchanged
    }
}
