//! Campaign service
//!
//! The minimal campaign lifecycle the reaction workflow depends on.

use tracing::{info, instrument};
use uuid::Uuid;

use campaign_core::entities::Campaign;
use campaign_core::error::DomainError;

use crate::dto::CreateCampaignRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Campaign service
pub struct CampaignService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CampaignService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_campaign(&self, request: CreateCampaignRequest) -> ServiceResult<Campaign> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(ServiceError::validation("Title must not be blank"));
        }
        let status = request.parsed_status()?;

        let campaign = Campaign::new(title.to_string(), status);
        self.ctx.campaign_repo().create(&campaign).await?;

        info!(campaign_id = %campaign.id, status = %campaign.status, "Campaign created");
        Ok(campaign)
    }

    /// Fetch an active campaign
    #[instrument(skip(self))]
    pub async fn get_campaign(&self, campaign_id: Uuid) -> ServiceResult<Campaign> {
        let campaign = self
            .ctx
            .campaign_repo()
            .find_active(campaign_id)
            .await?
            .ok_or(DomainError::CampaignNotFound(campaign_id))?;
        Ok(campaign)
    }

    /// Soft delete; reactions stay stored but the campaign stops accepting them
    #[instrument(skip(self))]
    pub async fn delete_campaign(&self, campaign_id: Uuid) -> ServiceResult<()> {
        let deleted = self.ctx.campaign_repo().soft_delete(campaign_id).await?;
        if !deleted {
            return Err(DomainError::CampaignNotFound(campaign_id).into());
        }

        info!(campaign_id = %campaign_id, "Campaign deleted");
        Ok(())
    }
}
