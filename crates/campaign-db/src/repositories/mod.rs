//! Repository implementations
//!
//! PostgreSQL implementations of the ports defined in campaign-core.

mod campaign;
mod error;
mod reaction;
mod unit_of_work;

pub use campaign::PgCampaignRepository;
pub use reaction::PgReactionRepository;
pub use unit_of_work::{PgUnitOfWork, PgUnitOfWorkFactory};
