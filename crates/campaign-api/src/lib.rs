//! # campaign-api
//!
//! REST API server built with Axum: public reaction endpoints and the admin
//! verification workflow.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
