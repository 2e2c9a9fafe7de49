//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct RawCampaignId {
    campaign_id: String,
}

/// `:campaign_id` parsed as a UUID
#[derive(Debug, Clone, Copy)]
pub struct CampaignIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CampaignIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawCampaignId>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        parse_campaign_id(&raw.campaign_id).map(CampaignIdPath)
    }
}

fn parse_campaign_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid campaign_id format"))
}
