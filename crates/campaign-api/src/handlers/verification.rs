//! Admin verification handlers
//!
//! Recheck, manual verification, and the review queue.

use axum::extract::State;
use campaign_service::dto::{
    RecheckResponse, VerificationQueuePage, VerificationQueueQuery, VerifyResponse,
};
use campaign_service::VerificationService;

use crate::extractors::{AdminUser, CampaignIdPath, ValidatedQuery};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Re-run the verification rule
///
/// POST /admin/campaigns/{campaign_id}/verification/recheck
pub async fn recheck(
    State(state): State<AppState>,
    _admin: AdminUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<RecheckResponse>> {
    let service = VerificationService::new(state.service_context());
    let needs_verification = service.recheck_verification(campaign_id).await?;
    Ok(ApiJson(RecheckResponse { needs_verification }))
}

/// Clear the flag after manual review
///
/// POST /admin/campaigns/{campaign_id}/verification/verify
pub async fn mark_verified(
    State(state): State<AppState>,
    _admin: AdminUser,
    CampaignIdPath(campaign_id): CampaignIdPath,
) -> ApiResult<ApiJson<VerifyResponse>> {
    let service = VerificationService::new(state.service_context());
    let cleared = service.mark_as_verified(campaign_id).await?;
    Ok(ApiJson(VerifyResponse { cleared }))
}

/// Page through flagged campaigns, newest first
///
/// GET /admin/verification-queue?limit=&before=
pub async fn verification_queue(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedQuery(query): ValidatedQuery<VerificationQueueQuery>,
) -> ApiResult<ApiJson<VerificationQueuePage>> {
    let before = query.parsed_before()?;
    let service = VerificationService::new(state.service_context());
    let page = service
        .list_campaigns_needing_verification(before, query.limit)
        .await?;
    Ok(ApiJson(page))
}
