//! Reaction entity - a user's current feedback signal on a campaign

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Kind of feedback a user can leave on a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    /// The offer still works as described
    StillWorks,
    /// The offer has ended
    Expired,
    /// The listing details are wrong
    InfoIncorrect,
}

impl ReactionType {
    /// Every reaction type, in display order
    pub const ALL: [ReactionType; 3] = [Self::StillWorks, Self::Expired, Self::InfoIncorrect];

    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StillWorks => "still_works",
            Self::Expired => "expired",
            Self::InfoIncorrect => "info_incorrect",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "still_works" => Ok(Self::StillWorks),
            "expired" => Ok(Self::Expired),
            "info_incorrect" => Ok(Self::InfoIncorrect),
            other => Err(DomainError::InvalidReactionType(other.to_string())),
        }
    }
}

/// Reaction entity
///
/// At most one reaction exists per `(campaign_id, user_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub campaign_id: Uuid,
    pub user_id: String,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    ///
    /// # Errors
    /// Returns `DomainError::MissingIdentifier` if `user_id` is blank
    pub fn new(
        campaign_id: Uuid,
        user_id: impl Into<String>,
        reaction_type: ReactionType,
    ) -> Result<Self, DomainError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(DomainError::MissingIdentifier("user_id"));
        }
        if campaign_id.is_nil() {
            return Err(DomainError::MissingIdentifier("campaign_id"));
        }

        let now = Utc::now();
        Ok(Self {
            campaign_id,
            user_id,
            reaction_type,
            created_at: now,
            updated_at: now,
        })
    }

    /// Change the reaction in place
    pub fn change_type(&mut self, reaction_type: ReactionType) {
        self.reaction_type = reaction_type;
        self.updated_at = Utc::now();
    }
}
