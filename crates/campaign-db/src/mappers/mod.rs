//! Model to entity mappers
//!
//! Text columns holding enums are parsed back into their domain types here.
//! The schema's CHECK constraints make a parse failure a data corruption
//! signal, so it surfaces as `DomainError::DatabaseError`.

mod campaign;
mod reaction;

pub use reaction::{stats_by_campaign, stats_from_counts};
