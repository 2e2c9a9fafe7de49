//! Reaction model -> entity mappers

use std::collections::HashMap;

use campaign_core::entities::{Reaction, ReactionStats, ReactionType};
use campaign_core::error::DomainError;
use uuid::Uuid;

use crate::models::{CampaignReactionCountModel, ReactionCountModel, ReactionModel};

fn parse_type(raw: &str) -> Result<ReactionType, DomainError> {
    raw.parse::<ReactionType>()
        .map_err(|e| DomainError::DatabaseError(format!("stored reaction: {e}")))
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            reaction_type: parse_type(&model.reaction_type)?,
            campaign_id: model.campaign_id,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Fold grouped counts into stats; types with no rows count as zero
pub fn stats_from_counts(rows: Vec<ReactionCountModel>) -> Result<ReactionStats, DomainError> {
    let counts = rows
        .into_iter()
        .map(|row| Ok((parse_type(&row.reaction_type)?, row.count)))
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(ReactionStats::from_counts(counts))
}

/// Fold counts grouped by campaign and type into one stats value per campaign
pub fn stats_by_campaign(
    rows: Vec<CampaignReactionCountModel>,
) -> Result<HashMap<Uuid, ReactionStats>, DomainError> {
    let mut grouped: HashMap<Uuid, Vec<(ReactionType, i64)>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.campaign_id)
            .or_default()
            .push((parse_type(&row.reaction_type)?, row.count));
    }

    Ok(grouped
        .into_iter()
        .map(|(campaign_id, counts)| (campaign_id, ReactionStats::from_counts(counts)))
        .collect())
}
