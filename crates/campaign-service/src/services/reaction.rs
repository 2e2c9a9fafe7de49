//! Reaction service
//!
//! Submits, changes, and withdraws reactions. Each mutation locks the
//! campaign, writes the reaction, and refreshes the verification flag inside
//! one unit of work; the caller gets the stats as of that commit.

use tracing::{info, instrument};
use uuid::Uuid;

use campaign_core::entities::{Reaction, ReactionStats, ReactionType};
use campaign_core::error::DomainError;
use campaign_core::traits::RepoResult;

use crate::dto::ReactionSummaryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::retry::retry_on_conflict;
use super::verification::{refresh_flag, FlagRefresh};

fn require_user_id(user_id: &str) -> ServiceResult<&str> {
    if user_id.trim().is_empty() {
        return Err(DomainError::MissingIdentifier("user_id").into());
    }
    Ok(user_id)
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit or change a user's reaction
    ///
    /// Resubmitting the current type is accepted and only touches `updated_at`.
    #[instrument(skip(self))]
    pub async fn submit_reaction(
        &self,
        campaign_id: Uuid,
        user_id: &str,
        reaction_type: ReactionType,
    ) -> ServiceResult<ReactionStats> {
        let reaction = Reaction::new(campaign_id, require_user_id(user_id)?, reaction_type)?;

        let refresh = retry_on_conflict("submit_reaction", || self.try_submit(&reaction)).await?;

        info!(
            campaign_id = %campaign_id,
            user_id = %user_id,
            reaction_type = %reaction_type,
            needs_verification = refresh.needs_verification,
            "Reaction submitted"
        );

        Ok(refresh.stats)
    }

    async fn try_submit(&self, reaction: &Reaction) -> RepoResult<FlagRefresh> {
        let mut uow = self.ctx.unit_of_work().begin().await?;
        let campaign = uow
            .lock_active_campaign(reaction.campaign_id)
            .await?
            .ok_or(DomainError::CampaignNotFound(reaction.campaign_id))?;

        uow.upsert_reaction(reaction).await?;
        let refresh = refresh_flag(uow.as_mut(), &campaign).await?;
        uow.commit().await?;
        Ok(refresh)
    }

    /// Withdraw a user's reaction
    ///
    /// Withdrawing when nothing is stored is not an error; the flag is still
    /// recomputed and the current stats returned.
    #[instrument(skip(self))]
    pub async fn withdraw_reaction(
        &self,
        campaign_id: Uuid,
        user_id: &str,
    ) -> ServiceResult<ReactionStats> {
        let user_id = require_user_id(user_id)?;

        let (removed, refresh) =
            retry_on_conflict("withdraw_reaction", || self.try_withdraw(campaign_id, user_id))
                .await?;

        info!(
            campaign_id = %campaign_id,
            user_id = %user_id,
            removed,
            needs_verification = refresh.needs_verification,
            "Reaction withdrawn"
        );

        Ok(refresh.stats)
    }

    async fn try_withdraw(&self, campaign_id: Uuid, user_id: &str) -> RepoResult<(bool, FlagRefresh)> {
        let mut uow = self.ctx.unit_of_work().begin().await?;
        let campaign = uow
            .lock_active_campaign(campaign_id)
            .await?
            .ok_or(DomainError::CampaignNotFound(campaign_id))?;

        let removed = uow.delete_reaction(campaign_id, user_id).await?;
        let refresh = refresh_flag(uow.as_mut(), &campaign).await?;
        uow.commit().await?;
        Ok((removed, refresh))
    }

    /// Current counts for an active campaign
    #[instrument(skip(self))]
    pub async fn get_reaction_stats(&self, campaign_id: Uuid) -> ServiceResult<ReactionStats> {
        self.require_active(campaign_id).await?;
        Ok(self.ctx.reaction_repo().count_by_type(campaign_id).await?)
    }

    /// A user's current reaction, if any
    #[instrument(skip(self))]
    pub async fn get_user_reaction(
        &self,
        campaign_id: Uuid,
        user_id: &str,
    ) -> ServiceResult<Option<Reaction>> {
        let user_id = require_user_id(user_id)?;
        self.require_active(campaign_id).await?;
        Ok(self.ctx.reaction_repo().find(campaign_id, user_id).await?)
    }

    /// Stats plus the caller's reaction; anonymous callers get `None`
    #[instrument(skip(self))]
    pub async fn get_reaction_summary(
        &self,
        campaign_id: Uuid,
        user_id: Option<&str>,
    ) -> ServiceResult<ReactionSummaryResponse> {
        let stats = self.get_reaction_stats(campaign_id).await?;

        let user_reaction = match user_id {
            Some(user_id) => self
                .ctx
                .reaction_repo()
                .find(campaign_id, require_user_id(user_id)?)
                .await?
                .map(|r| r.reaction_type),
            None => None,
        };

        Ok(ReactionSummaryResponse {
            stats,
            user_reaction,
        })
    }

    /// All reactions on a campaign, oldest first (admin)
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, campaign_id: Uuid) -> ServiceResult<Vec<Reaction>> {
        self.require_active(campaign_id).await?;
        Ok(self.ctx.reaction_repo().find_by_campaign(campaign_id).await?)
    }

    async fn require_active(&self, campaign_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .campaign_repo()
            .find_active(campaign_id)
            .await?
            .ok_or(DomainError::CampaignNotFound(campaign_id))?;
        Ok(())
    }
}
