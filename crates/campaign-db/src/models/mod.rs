//! Database models - rows as SQLx reads them

mod campaign;
mod reaction;

pub use campaign::CampaignModel;
pub use reaction::{CampaignReactionCountModel, ReactionCountModel, ReactionModel};
