//! Campaign model -> entity mapper

use campaign_core::entities::{Campaign, CampaignStatus};
use campaign_core::error::DomainError;

use crate::models::CampaignModel;

impl TryFrom<CampaignModel> for Campaign {
    type Error = DomainError;

    fn try_from(model: CampaignModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<CampaignStatus>()
            .map_err(|e| DomainError::DatabaseError(format!("campaign {}: {e}", model.id)))?;

        Ok(Campaign {
            id: model.id,
            title: model.title,
            status,
            needs_verification: model.needs_verification,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn model(status: &str) -> CampaignModel {
        CampaignModel {
            id: Uuid::new_v4(),
            title: "Free inference credits".to_string(),
            status: status.to_string(),
            needs_verification: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_model_to_entity() {
        let campaign = Campaign::try_from(model("published")).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Published);
        assert!(campaign.needs_verification);
        assert!(campaign.is_active());
    }

    #[test]
    fn test_unknown_status_is_database_error() {
        let err = Campaign::try_from(model("live")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
