//! # campaign-core
//!
//! Domain layer for campaign reactions: entities, the reaction statistics
//! aggregate, the verification rule, and the repository ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod verification;

// Re-export commonly used types at crate root
pub use entities::{
    Campaign, CampaignStatus, QueueCursor, Reaction, ReactionStats, ReactionType,
};
pub use error::DomainError;
pub use traits::{
    CampaignRepository, ReactionRepository, RepoResult, UnitOfWork, UnitOfWorkFactory,
};
pub use verification::{needs_verification, FlagTransition};
