//! Axum extractors for request handling
//!
//! Bearer-token identity, typed path parameters, and validated bodies.

mod auth;
mod path;
mod validated;

pub use auth::{AdminUser, AuthUser, OptionalAuthUser};
pub use path::CampaignIdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
