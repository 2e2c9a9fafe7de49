//! Test fixtures and wire types
//!
//! Response shapes mirror the camelCase JSON the API emits.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix for test data within one process
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Distinct external user id
pub fn unique_user() -> String {
    format!("it-user-{}-{}", unique_suffix(), Uuid::new_v4().simple())
}

#[derive(Debug, Serialize)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub status: Option<String>,
}

impl CreateCampaignRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Free credits #{}", unique_suffix()),
            status: Some("published".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitReactionRequest {
    #[serde(rename = "type")]
    pub reaction_type: String,
}

impl SubmitReactionRequest {
    pub fn of(reaction_type: &str) -> Self {
        Self {
            reaction_type: reaction_type.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub needs_verification: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub still_works: i64,
    pub expired: i64,
    pub info_incorrect: i64,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub stats: StatsResponse,
    pub user_reaction: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub campaign_id: Uuid,
    pub user_id: String,
    #[serde(rename = "type")]
    pub reaction_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecheckResponse {
    pub needs_verification: bool,
}

#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub cleared: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub campaign_id: Uuid,
    pub title: String,
    pub stats: StatsResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuePage {
    pub campaigns: Vec<QueueEntry>,
    pub next_cursor: Option<String>,
}
