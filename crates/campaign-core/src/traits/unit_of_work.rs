//! Unit of work - a transaction spanning a reaction mutation and the flag refresh
//!
//! Everything done through one `UnitOfWork` is committed together or not at
//! all. Dropping it without calling `commit` rolls back.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Campaign, Reaction, ReactionStats};

use super::repositories::RepoResult;

/// Opens units of work
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>>;
}

#[async_trait]
pub trait UnitOfWork: Send {
    /// Load an active campaign and hold a write lock on it until commit
    ///
    /// Serializes reaction mutations and flag refreshes per campaign.
    async fn lock_active_campaign(&mut self, id: Uuid) -> RepoResult<Option<Campaign>>;

    /// Insert the reaction, or update type and `updated_at` of the existing
    /// row for the same `(campaign_id, user_id)`
    async fn upsert_reaction(&mut self, reaction: &Reaction) -> RepoResult<Reaction>;

    /// Delete a user's reaction; returns whether a row was removed
    async fn delete_reaction(&mut self, campaign_id: Uuid, user_id: &str) -> RepoResult<bool>;

    /// Count reactions by type, seeing this unit of work's own writes
    async fn reaction_stats(&mut self, campaign_id: Uuid) -> RepoResult<ReactionStats>;

    /// Write the verification flag, bumping `updated_at` only when it changes
    ///
    /// Returns whether the stored value changed.
    async fn set_needs_verification(&mut self, campaign_id: Uuid, flag: bool) -> RepoResult<bool>;

    async fn commit(self: Box<Self>) -> RepoResult<()>;
}
