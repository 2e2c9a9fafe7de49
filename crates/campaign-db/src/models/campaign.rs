//! Campaign database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for campaigns table
#[derive(Debug, Clone, FromRow)]
pub struct CampaignModel {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub needs_verification: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
