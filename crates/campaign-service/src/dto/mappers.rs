//! Entity to DTO mappers

use campaign_core::entities::{Campaign, Reaction};

use super::responses::{CampaignResponse, ReactionResponse};

impl From<&Campaign> for CampaignResponse {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title.clone(),
            status: campaign.status,
            needs_verification: campaign.needs_verification,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self::from(&campaign)
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            campaign_id: reaction.campaign_id,
            user_id: reaction.user_id,
            reaction_type: reaction.reaction_type,
            created_at: reaction.created_at,
            updated_at: reaction.updated_at,
        }
    }
}
