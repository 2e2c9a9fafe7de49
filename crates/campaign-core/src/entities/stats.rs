//! Reaction statistics - per-type counts for one campaign

use serde::Serialize;

use super::reaction::ReactionType;

/// Aggregated reaction counts for a campaign
///
/// `total` always equals the sum of the three type counts; the fields are
/// private so that invariant cannot be broken from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionStats {
    still_works: i64,
    expired: i64,
    info_incorrect: i64,
    total: i64,
}

impl ReactionStats {
    /// Build stats from per-type counts
    ///
    /// Negative counts are clamped to zero.
    pub fn new(still_works: i64, expired: i64, info_incorrect: i64) -> Self {
        let still_works = still_works.max(0);
        let expired = expired.max(0);
        let info_incorrect = info_incorrect.max(0);
        Self {
            still_works,
            expired,
            info_incorrect,
            total: still_works + expired + info_incorrect,
        }
    }

    /// Build stats from `(type, count)` pairs, e.g. the rows of a GROUP BY query
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (ReactionType, i64)>,
    {
        counts
            .into_iter()
            .fold(Self::default(), |mut stats, (reaction_type, count)| {
                stats.add(reaction_type, count);
                stats
            })
    }

    /// Count a single reaction
    pub fn record(&mut self, reaction_type: ReactionType) {
        self.add(reaction_type, 1);
    }

    fn add(&mut self, reaction_type: ReactionType, count: i64) {
        let count = count.max(0);
        match reaction_type {
            ReactionType::StillWorks => self.still_works += count,
            ReactionType::Expired => self.expired += count,
            ReactionType::InfoIncorrect => self.info_incorrect += count,
        }
        self.total += count;
    }

    #[inline]
    pub fn still_works(&self) -> i64 {
        self.still_works
    }

    #[inline]
    pub fn expired(&self) -> i64 {
        self.expired
    }

    #[inline]
    pub fn info_incorrect(&self) -> i64 {
        self.info_incorrect
    }

    #[inline]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Count for a single reaction type
    pub fn count(&self, reaction_type: ReactionType) -> i64 {
        match reaction_type {
            ReactionType::StillWorks => self.still_works,
            ReactionType::Expired => self.expired,
            ReactionType::InfoIncorrect => self.info_incorrect,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
