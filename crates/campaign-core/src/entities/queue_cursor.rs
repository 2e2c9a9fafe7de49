//! Keyset cursor over the verification queue

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use super::campaign::Campaign;
use crate::error::DomainError;

/// Position in the review queue, ordered `(updated_at, id)` descending
///
/// Timestamps are truncated to microseconds, the precision PostgreSQL
/// stores, so a cursor taken from a fetched row compares equal to that row.
/// On the wire it reads `<unix micros>_<campaign id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueueCursor {
    updated_at: DateTime<Utc>,
    campaign_id: Uuid,
}

impl QueueCursor {
    pub fn new(updated_at: DateTime<Utc>, campaign_id: Uuid) -> Self {
        Self {
            updated_at: updated_at.trunc_subsecs(6),
            campaign_id,
        }
    }

    /// Cursor pointing at `campaign`; the next page starts strictly after it
    pub fn of(campaign: &Campaign) -> Self {
        Self::new(campaign.updated_at, campaign.id)
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[inline]
    pub fn campaign_id(&self) -> Uuid {
        self.campaign_id
    }
}

impl fmt::Display for QueueCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.updated_at.timestamp_micros(), self.campaign_id)
    }
}

impl FromStr for QueueCursor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidCursor(s.to_string());

        let (micros, id) = s.split_once('_').ok_or_else(invalid)?;
        let updated_at = micros
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_micros)
            .ok_or_else(invalid)?;
        let campaign_id = id.parse::<Uuid>().map_err(|_| invalid())?;

        Ok(Self::new(updated_at, campaign_id))
    }
}
