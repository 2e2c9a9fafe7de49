//! Verification service
//!
//! Keeps the cached `needs_verification` flag in step with the reactions and
//! backs the admin review workflow.

use tracing::{info, instrument};
use uuid::Uuid;

use campaign_core::entities::{Campaign, QueueCursor, ReactionStats};
use campaign_core::error::DomainError;
use campaign_core::traits::{RepoResult, UnitOfWork};
use campaign_core::verification::{needs_verification, FlagTransition};

use crate::dto::{VerificationQueueEntry, VerificationQueuePage};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::retry::retry_on_conflict;

/// Queue page size when the caller gives no limit
pub const DEFAULT_QUEUE_LIMIT: i64 = 50;
/// Largest queue page
pub const MAX_QUEUE_LIMIT: i64 = 200;

/// Outcome of recomputing the flag for one campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagRefresh {
    pub stats: ReactionStats,
    pub needs_verification: bool,
    pub transition: FlagTransition,
}

/// Recompute stats, evaluate the rule, and persist the flag
///
/// `campaign` must be the row locked by `uow`, so its flag is the value
/// before this refresh.
pub(crate) async fn refresh_flag(
    uow: &mut dyn UnitOfWork,
    campaign: &Campaign,
) -> RepoResult<FlagRefresh> {
    let stats = uow.reaction_stats(campaign.id).await?;
    let flag = needs_verification(&stats);
    uow.set_needs_verification(campaign.id, flag).await?;

    let transition = FlagTransition::between(campaign.needs_verification, flag);
    if transition.is_change() {
        info!(
            campaign_id = %campaign.id,
            ?transition,
            still_works = stats.still_works(),
            expired = stats.expired(),
            "Verification flag changed"
        );
    }

    Ok(FlagRefresh {
        stats,
        needs_verification: flag,
        transition,
    })
}

/// Verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Re-run the rule for a campaign and persist the result
    ///
    /// Idempotent: with no reaction change in between, a second call returns
    /// the same value and writes nothing.
    #[instrument(skip(self))]
    pub async fn recheck_verification(&self, campaign_id: Uuid) -> ServiceResult<bool> {
        let refresh = retry_on_conflict("recheck_verification", || self.try_recheck(campaign_id)).await?;
        Ok(refresh.needs_verification)
    }

    async fn try_recheck(&self, campaign_id: Uuid) -> RepoResult<FlagRefresh> {
        let mut uow = self.ctx.unit_of_work().begin().await?;
        let campaign = uow
            .lock_active_campaign(campaign_id)
            .await?
            .ok_or(DomainError::CampaignNotFound(campaign_id))?;

        let refresh = refresh_flag(uow.as_mut(), &campaign).await?;
        uow.commit().await?;
        Ok(refresh)
    }

    /// Clear the flag after manual review, leaving reactions untouched
    ///
    /// Returns whether the flag was set before the call. The next reaction
    /// change recomputes the flag as usual.
    #[instrument(skip(self))]
    pub async fn mark_as_verified(&self, campaign_id: Uuid) -> ServiceResult<bool> {
        let cleared = self
            .ctx
            .campaign_repo()
            .clear_verification_flag(campaign_id)
            .await?;

        if !cleared {
            // Either it was already clear or there is no such campaign
            self.ctx
                .campaign_repo()
                .find_active(campaign_id)
                .await?
                .ok_or(DomainError::CampaignNotFound(campaign_id))?;
        }

        info!(campaign_id = %campaign_id, cleared, "Campaign marked as verified");
        Ok(cleared)
    }

    /// One page of flagged campaigns with their current stats, most recently
    /// updated first
    ///
    /// `before` is the `next_cursor` of the previous page. Paging from `None`
    /// until the cursor runs out visits every campaign that stays flagged and
    /// untouched during the walk exactly once.
    #[instrument(skip(self))]
    pub async fn list_campaigns_needing_verification(
        &self,
        before: Option<QueueCursor>,
        limit: Option<i64>,
    ) -> ServiceResult<VerificationQueuePage> {
        let limit = limit.unwrap_or(DEFAULT_QUEUE_LIMIT);
        if !(1..=MAX_QUEUE_LIMIT).contains(&limit) {
            return Err(ServiceError::validation(format!(
                "limit must be between 1 and {MAX_QUEUE_LIMIT}"
            )));
        }

        // One extra row tells whether another page exists
        let mut campaigns = self
            .ctx
            .campaign_repo()
            .find_needing_verification(before, limit + 1)
            .await?;
        let page_len = usize::try_from(limit).unwrap_or(usize::MAX);
        let has_more = campaigns.len() > page_len;
        campaigns.truncate(page_len);

        let next_cursor = if has_more {
            campaigns.last().map(|c| QueueCursor::of(c).to_string())
        } else {
            None
        };

        let ids: Vec<Uuid> = campaigns.iter().map(|c| c.id).collect();
        let mut stats = self.ctx.reaction_repo().count_by_type_many(&ids).await?;

        let campaigns = campaigns
            .into_iter()
            .map(|campaign| VerificationQueueEntry {
                stats: stats.remove(&campaign.id).unwrap_or_default(),
                campaign_id: campaign.id,
                title: campaign.title,
                updated_at: campaign.updated_at,
            })
            .collect();

        Ok(VerificationQueuePage {
            campaigns,
            next_cursor,
        })
    }
}
