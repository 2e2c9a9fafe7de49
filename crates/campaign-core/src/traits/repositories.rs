//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Campaign, QueueCursor, Reaction, ReactionStats};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Campaign Repository
// ============================================================================

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Find a campaign that exists and is not soft deleted
    async fn find_active(&self, id: Uuid) -> RepoResult<Option<Campaign>>;

    /// List active campaigns whose verification flag is set, most recently
    /// updated first, starting strictly after `before` when given
    async fn find_needing_verification(
        &self,
        before: Option<QueueCursor>,
        limit: i64,
    ) -> RepoResult<Vec<Campaign>>;

    /// Create a new campaign
    async fn create(&self, campaign: &Campaign) -> RepoResult<()>;

    /// Soft delete a campaign; returns false if it was missing or already deleted
    async fn soft_delete(&self, id: Uuid) -> RepoResult<bool>;

    /// Clear the verification flag; returns true only if it was set
    async fn clear_verification_flag(&self, id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository (reads)
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction on a campaign
    async fn find(&self, campaign_id: Uuid, user_id: &str) -> RepoResult<Option<Reaction>>;

    /// Get all reactions for a campaign, oldest first
    async fn find_by_campaign(&self, campaign_id: Uuid) -> RepoResult<Vec<Reaction>>;

    /// Count reactions by type for a campaign
    async fn count_by_type(&self, campaign_id: Uuid) -> RepoResult<ReactionStats>;

    /// Count reactions by type for several campaigns at once
    ///
    /// Campaigns without reactions are absent from the map.
    async fn count_by_type_many(
        &self,
        campaign_ids: &[Uuid],
    ) -> RepoResult<HashMap<Uuid, ReactionStats>>;
}
