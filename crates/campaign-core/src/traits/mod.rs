//! Ports implemented by the infrastructure layer

mod repositories;
mod unit_of_work;

pub use repositories::{CampaignRepository, ReactionRepository, RepoResult};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
