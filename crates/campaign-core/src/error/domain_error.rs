//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Campaign not found: {0}")]
    CampaignNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction type: {0} (expected still_works, expired or info_incorrect)")]
    InvalidReactionType(String),

    #[error("Invalid campaign status: {0}")]
    InvalidCampaignStatus(String),

    #[error("Missing required identifier: {0}")]
    MissingIdentifier(&'static str),

    #[error("Invalid queue cursor: {0}")]
    InvalidCursor(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// The store reported a unique violation on (campaign_id, user_id)
    #[error("Reaction write conflicted with a concurrent write")]
    ReactionConflict,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::CampaignNotFound(_) => "UNKNOWN_CAMPAIGN",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::InvalidCampaignStatus(_) => "INVALID_CAMPAIGN_STATUS",
            Self::MissingIdentifier(_) => "MISSING_IDENTIFIER",
            Self::InvalidCursor(_) => "INVALID_CURSOR",

            Self::ReactionConflict => "REACTION_CONFLICT",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CampaignNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionType(_)
                | Self::InvalidCampaignStatus(_)
                | Self::MissingIdentifier(_)
                | Self::InvalidCursor(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionConflict)
    }
}
