//! PostgreSQL implementation of ReactionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::{Reaction, ReactionStats};
use campaign_core::traits::{ReactionRepository, RepoResult};

use crate::mappers::{stats_by_campaign, stats_from_counts};
use crate::models::{CampaignReactionCountModel, ReactionCountModel, ReactionModel};

use super::error::map_db_error;

/// Per-type counts for one campaign, on a pool or inside a transaction
pub(crate) async fn fetch_stats<'e, E>(executor: E, campaign_id: Uuid) -> RepoResult<ReactionStats>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, ReactionCountModel>(
        r"
        SELECT reaction_type, COUNT(*) AS count
        FROM campaign_reactions
        WHERE campaign_id = $1
        GROUP BY reaction_type
        ",
    )
    .bind(campaign_id)
    .fetch_all(executor)
    .await
    .map_err(map_db_error)?;

    stats_from_counts(rows)
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, campaign_id: Uuid, user_id: &str) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT campaign_id, user_id, reaction_type, created_at, updated_at
            FROM campaign_reactions
            WHERE campaign_id = $1 AND user_id = $2
            ",
        )
        .bind(campaign_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_campaign(&self, campaign_id: Uuid) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT campaign_id, user_id, reaction_type, created_at, updated_at
            FROM campaign_reactions
            WHERE campaign_id = $1
            ORDER BY created_at, user_id
            ",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Reaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_type(&self, campaign_id: Uuid) -> RepoResult<ReactionStats> {
        fetch_stats(&self.pool, campaign_id).await
    }

    #[instrument(skip(self, campaign_ids), fields(campaigns = campaign_ids.len()))]
    async fn count_by_type_many(
        &self,
        campaign_ids: &[Uuid],
    ) -> RepoResult<HashMap<Uuid, ReactionStats>> {
        if campaign_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, CampaignReactionCountModel>(
            r"
            SELECT campaign_id, reaction_type, COUNT(*) AS count
            FROM campaign_reactions
            WHERE campaign_id = ANY($1)
            GROUP BY campaign_id, reaction_type
            ",
        )
        .bind(campaign_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        stats_by_campaign(rows)
    }
}
