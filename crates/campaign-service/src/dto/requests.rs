//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Enum-valued fields arrive as strings so that an unknown value is reported
//! with its own error code instead of a generic body rejection.

use serde::Deserialize;
use validator::Validate;

use campaign_core::entities::{CampaignStatus, QueueCursor, ReactionType};
use campaign_core::error::DomainError;

// ============================================================================
// Reaction Requests
// ============================================================================

/// Submit or change the caller's reaction
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitReactionRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Reaction type is required"))]
    pub reaction_type: String,
}

impl SubmitReactionRequest {
    /// Parse the reaction type
    ///
    /// # Errors
    /// Returns `DomainError::InvalidReactionType` for unknown values
    pub fn parsed_type(&self) -> Result<ReactionType, DomainError> {
        self.reaction_type.trim().parse()
    }
}

// ============================================================================
// Campaign Requests
// ============================================================================

/// Create campaign request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaignRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// `draft` when omitted
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateCampaignRequest {
    /// # Errors
    /// Returns `DomainError::InvalidCampaignStatus` for unknown values
    pub fn parsed_status(&self) -> Result<CampaignStatus, DomainError> {
        self.status
            .as_deref()
            .map_or(Ok(CampaignStatus::default()), |s| s.trim().parse())
    }
}

// ============================================================================
// Verification Requests
// ============================================================================

/// Query string for the review queue
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VerificationQueueQuery {
    #[validate(range(min = 1, max = 200, message = "Limit must be between 1 and 200"))]
    pub limit: Option<i64>,

    /// `nextCursor` of the previous page
    #[serde(default)]
    pub before: Option<String>,
}

impl VerificationQueueQuery {
    /// # Errors
    /// Returns `DomainError::InvalidCursor` for a malformed cursor
    pub fn parsed_before(&self) -> Result<Option<QueueCursor>, DomainError> {
        self.before.as_deref().map(str::parse).transpose()
    }
}
