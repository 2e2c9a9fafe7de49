//! PostgreSQL unit of work - one transaction per reaction mutation
//!
//! The campaign row is locked first (`SELECT ... FOR UPDATE`), so every write
//! and the flag refresh that follows it are serialized per campaign and the
//! aggregate always reflects the latest committed reactions.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::{Campaign, Reaction, ReactionStats};
use campaign_core::traits::{RepoResult, UnitOfWork, UnitOfWorkFactory};

use crate::models::{CampaignModel, ReactionModel};

use super::campaign::CAMPAIGN_COLUMNS;
use super::error::{map_db_error, map_write_error};
use super::reaction::fetch_stats;

/// Opens `PgUnitOfWork`s on a pool
#[derive(Clone)]
pub struct PgUnitOfWorkFactory {
    pool: PgPool,
}

impl PgUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

/// A database transaction; rolled back on drop unless committed
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn lock_active_campaign(&mut self, id: Uuid) -> RepoResult<Option<Campaign>> {
        let sql = format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        );
        let result = sqlx::query_as::<_, CampaignModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_write_error)?;

        result.map(Campaign::try_from).transpose()
    }

    #[instrument(skip(self, reaction), fields(campaign_id = %reaction.campaign_id, reaction_type = %reaction.reaction_type))]
    async fn upsert_reaction(&mut self, reaction: &Reaction) -> RepoResult<Reaction> {
        let stored = sqlx::query_as::<_, ReactionModel>(
            r"
            INSERT INTO campaign_reactions (campaign_id, user_id, reaction_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (campaign_id, user_id) DO UPDATE
            SET reaction_type = EXCLUDED.reaction_type,
                updated_at = EXCLUDED.updated_at
            RETURNING campaign_id, user_id, reaction_type, created_at, updated_at
            ",
        )
        .bind(reaction.campaign_id)
        .bind(&reaction.user_id)
        .bind(reaction.reaction_type.as_str())
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_write_error)?;

        Reaction::try_from(stored)
    }

    #[instrument(skip(self))]
    async fn delete_reaction(&mut self, campaign_id: Uuid, user_id: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            "DELETE FROM campaign_reactions WHERE campaign_id = $1 AND user_id = $2",
        )
        .bind(campaign_id)
        .bind(user_id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn reaction_stats(&mut self, campaign_id: Uuid) -> RepoResult<ReactionStats> {
        fetch_stats(&mut *self.tx, campaign_id).await
    }

    #[instrument(skip(self))]
    async fn set_needs_verification(&mut self, campaign_id: Uuid, flag: bool) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE campaigns
            SET needs_verification = $2, updated_at = NOW()
            WHERE id = $1 AND needs_verification IS DISTINCT FROM $2
            ",
        )
        .bind(campaign_id)
        .bind(flag)
        .execute(&mut *self.tx)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_write_error)
    }
}
