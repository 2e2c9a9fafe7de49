//! Business logic services
//!
//! Every reaction mutation runs in one unit of work together with the
//! verification flag refresh it triggers.

pub mod campaign;
pub mod context;
pub mod error;
pub mod reaction;
mod retry;
pub mod verification;

pub use campaign::CampaignService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
pub use verification::{FlagRefresh, VerificationService};
