//! Campaign entity - a listed free-credit offer

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Publication status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl CampaignStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::InvalidCampaignStatus(other.to_string())),
        }
    }
}

/// Campaign entity (the slice the reaction workflow needs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: Uuid,
    pub title: String,
    pub status: CampaignStatus,
    /// Cached result of the verification rule over the current reactions
    pub needs_verification: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Create a new Campaign
    pub fn new(title: String, status: CampaignStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            status,
            needs_verification: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the campaign is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether reactions may target this campaign
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_deleted()
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == CampaignStatus::Published
    }
}
