//! Domain entities - core business objects

mod campaign;
mod queue_cursor;
mod reaction;
mod stats;

pub use campaign::{Campaign, CampaignStatus};
pub use queue_cursor::QueueCursor;
pub use reaction::{Reaction, ReactionType};
pub use stats::ReactionStats;
