//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for campaign_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub campaign_id: Uuid,
    pub user_id: String,
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-type reaction count (from `GROUP BY reaction_type`)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub reaction_type: String,
    pub count: i64,
}

/// Per-campaign, per-type reaction count (from `GROUP BY campaign_id, reaction_type`)
#[derive(Debug, Clone, FromRow)]
pub struct CampaignReactionCountModel {
    pub campaign_id: Uuid,
    pub reaction_type: String,
    pub count: i64,
}
