//! Route definitions
//!
//! Everything is mounted under /api/v1. Health routes are built separately so
//! they can bypass the rate limiter.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{campaigns, health, reactions, verification};
use crate::state::AppState;

/// API version prefix
pub const API_PREFIX: &str = "/api/v1";

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Rate-limited API routes, relative to the version prefix
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reaction_routes())
        .merge(admin_routes())
}

/// Public reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campaigns/:campaign_id/reactions",
            get(reactions::get_reaction_summary),
        )
        .route(
            "/campaigns/:campaign_id/reactions/@me",
            put(reactions::submit_reaction)
                .get(reactions::get_own_reaction)
                .delete(reactions::withdraw_reaction),
        )
}

/// Admin routes; every handler requires the admin role
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/campaigns", post(campaigns::create_campaign))
        .route(
            "/admin/campaigns/:campaign_id",
            get(campaigns::get_campaign).delete(campaigns::delete_campaign),
        )
        .route(
            "/admin/campaigns/:campaign_id/reactions",
            get(campaigns::list_reactions),
        )
        .route(
            "/admin/campaigns/:campaign_id/verification/recheck",
            post(verification::recheck),
        )
        .route(
            "/admin/campaigns/:campaign_id/verification/verify",
            post(verification::mark_verified),
        )
        .route(
            "/admin/verification-queue",
            get(verification::verification_queue),
        )
}
