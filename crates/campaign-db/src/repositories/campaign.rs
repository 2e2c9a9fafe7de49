//! PostgreSQL implementation of CampaignRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::{Campaign, QueueCursor};
use campaign_core::traits::{CampaignRepository, RepoResult};

use crate::models::CampaignModel;

use super::error::map_db_error;

pub(crate) const CAMPAIGN_COLUMNS: &str =
    "id, title, status, needs_verification, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of CampaignRepository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    /// Create a new PgCampaignRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    #[instrument(skip(self))]
    async fn find_active(&self, id: Uuid) -> RepoResult<Option<Campaign>> {
        let sql = format!("SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1 AND deleted_at IS NULL");
        let result = sqlx::query_as::<_, CampaignModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Campaign::try_from).transpose()
    }

    #[instrument(skip(self), fields(before = before.map(|c| c.to_string())))]
    async fn find_needing_verification(
        &self,
        before: Option<QueueCursor>,
        limit: i64,
    ) -> RepoResult<Vec<Campaign>> {
        let sql = format!(
            r"
            SELECT {CAMPAIGN_COLUMNS}
            FROM campaigns
            WHERE needs_verification AND deleted_at IS NULL
              AND ($1::timestamptz IS NULL OR (updated_at, id) < ($1, $2::uuid))
            ORDER BY updated_at DESC, id DESC
            LIMIT $3
            "
        );
        let results = sqlx::query_as::<_, CampaignModel>(&sql)
            .bind(before.map(|c| c.updated_at()))
            .bind(before.map(|c| c.campaign_id()))
            .bind(limit.max(1))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Campaign::try_from).collect()
    }

    #[instrument(skip(self, campaign), fields(campaign_id = %campaign.id))]
    async fn create(&self, campaign: &Campaign) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO campaigns (id, title, status, needs_verification, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(campaign.id)
        .bind(&campaign.title)
        .bind(campaign.status.as_str())
        .bind(campaign.needs_verification)
        .bind(campaign.created_at)
        .bind(campaign.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE campaigns
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn clear_verification_flag(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE campaigns
            SET needs_verification = FALSE, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL AND needs_verification
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
