//! Service context - dependency container for services
//!
//! Holds the repository ports, the unit-of-work factory, and the JWT verifier.

use std::sync::Arc;

use campaign_common::auth::JwtService;
use campaign_core::traits::{CampaignRepository, ReactionRepository, UnitOfWorkFactory};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    campaign_repo: Arc<dyn CampaignRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    unit_of_work: Arc<dyn UnitOfWorkFactory>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn new(
        campaign_repo: Arc<dyn CampaignRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        unit_of_work: Arc<dyn UnitOfWorkFactory>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            campaign_repo,
            reaction_repo,
            unit_of_work,
            jwt_service,
        }
    }

    pub fn campaign_repo(&self) -> &dyn CampaignRepository {
        self.campaign_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Factory for transactional reaction writes
    pub fn unit_of_work(&self) -> &dyn UnitOfWorkFactory {
        self.unit_of_work.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    campaign_repo: Option<Arc<dyn CampaignRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    unit_of_work: Option<Arc<dyn UnitOfWorkFactory>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campaign_repo(mut self, repo: Arc<dyn CampaignRepository>) -> Self {
        self.campaign_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn unit_of_work(mut self, factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        self.unit_of_work = Some(factory);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.campaign_repo.ok_or_else(|| missing("campaign_repo"))?,
            self.reaction_repo.ok_or_else(|| missing("reaction_repo"))?,
            self.unit_of_work.ok_or_else(|| missing("unit_of_work"))?,
            self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
        ))
    }
}
