//! Admin campaign handlers

use axum::extract::State;
use campaign_service::dto::{CampaignResponse, CreateCampaignRequest, ReactionResponse};
use campaign_service::{CampaignService, ReactionService};

use crate::extractors::{AdminUser, CampaignIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /admin/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ValidatedJson(request): ValidatedJson<CreateCampaignRequest>,
) -> ApiResult<Created<ApiJson<CampaignResponse>>> {
    let service = CampaignService::new(state.service_context());
    let campaign = service.create_campaign(request).await?;

    tracing::info!(admin = %admin.user_id, campaign_id = %campaign.id, "Admin created campaign");
    Ok(Created(ApiJson(campaign.into())))
}

/// GET /admin/campaigns/{campaign_id}
pub async fn get_campaign(
    State(state): State<AppState>,
    _admin: AdminUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<CampaignResponse>> {
    let service = CampaignService::new(state.service_context());
    let campaign = service.get_campaign(campaign_id).await?;
    Ok(ApiJson(campaign.into()))
}

/// Soft delete
///
/// DELETE /admin/campaigns/{campaign_id}
pub async fn delete_campaign(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<NoContent> {
    let service = CampaignService::new(state.service_context());
    service.delete_campaign(campaign_id).await?;

    tracing::info!(admin = %admin.user_id, campaign_id = %campaign_id, "Admin deleted campaign");
    Ok(NoContent)
}

/// Every reaction on the campaign, oldest first
///
/// GET /admin/campaigns/{campaign_id}/reactions
pub async fn list_reactions(
    State(state): State<AppState>,
    _admin: AdminUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<Vec<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let reactions = service.list_reactions(campaign_id).await?;
    Ok(ApiJson(reactions.into_iter().map(ReactionResponse::from).collect()))
}
