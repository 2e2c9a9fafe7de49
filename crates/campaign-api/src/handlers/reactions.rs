//! Reaction handlers
//!
//! Public endpoints: any authenticated user may react to an active campaign.

use axum::extract::State;
use campaign_core::ReactionStats;
use campaign_service::dto::{ReactionResponse, ReactionSummaryResponse, SubmitReactionRequest};
use campaign_service::ReactionService;

use crate::extractors::{AuthUser, CampaignIdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Stats plus the caller's reaction when a token is supplied
///
/// GET /campaigns/{campaign_id}/reactions
pub async fn get_reaction_summary(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<ReactionSummaryResponse>> {
    let service = ReactionService::new(state.service_context());
    let summary = service
        .get_reaction_summary(campaign_id, auth.user_id())
        .await?;
    Ok(ApiJson(summary))
}

/// Submit or change the caller's reaction
///
/// PUT /campaigns/{campaign_id}/reactions/@me
pub async fn submit_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
    ValidatedJson(request): ValidatedJson<SubmitReactionRequest>,
) -> ApiResult<ApiJson<ReactionStats>> {
    let reaction_type = request.parsed_type()?;

    let service = ReactionService::new(state.service_context());
    let stats = service
        .submit_reaction(campaign_id, &auth.user_id, reaction_type)
        .await?;
    Ok(ApiJson(stats))
}

/// The caller's reaction, `null` if none
///
/// GET /campaigns/{campaign_id}/reactions/@me
pub async fn get_own_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<Option<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service
        .get_user_reaction(campaign_id, &auth.user_id)
        .await?;
    Ok(ApiJson(reaction.map(ReactionResponse::from)))
}

/// Withdraw the caller's reaction
///
/// DELETE /campaigns/{campaign_id}/reactions/@me
pub async fn withdraw_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<ReactionStats>> {
    let service = ReactionService::new(state.service_context());
    let stats = service
        .withdraw_reaction(campaign_id, &auth.user_id)
        .await?;
    Ok(ApiJson(stats))
}
