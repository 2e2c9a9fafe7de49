//! Response DTOs for API endpoints
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use campaign_core::entities::{CampaignStatus, ReactionStats, ReactionType};

// ============================================================================
// Campaign Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: Uuid,
    pub title: String,
    pub status: CampaignStatus,
    pub needs_verification: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub campaign_id: Uuid,
    pub user_id: String,
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a campaign's reactions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSummaryResponse {
    pub stats: ReactionStats,
    /// The caller's current reaction; `null` when anonymous or not reacted
    pub user_reaction: Option<ReactionType>,
}

// ============================================================================
// Verification Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecheckResponse {
    pub needs_verification: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VerifyResponse {
    /// Whether the flag was set before the call
    pub cleared: bool,
}

/// Entry of the admin review queue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationQueueEntry {
    pub campaign_id: Uuid,
    pub title: String,
    pub stats: ReactionStats,
    pub updated_at: DateTime<Utc>,
}

/// One page of the review queue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationQueuePage {
    pub campaigns: Vec<VerificationQueueEntry>,
    /// Pass back as `before` for the next page; `null` on the last page
    pub next_cursor: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
