//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations run at startup)
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use campaign_common::Role;
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use uuid::Uuid;

async fn create_campaign(server: &TestServer, admin: &str) -> CampaignResponse {
    let response = server
        .post_auth("/admin/campaigns", admin, &CreateCampaignRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn react(server: &TestServer, campaign_id: Uuid, token: &str, ty: &str) -> StatsResponse {
    let response = server
        .put_auth(
            &format!("/campaigns/{campaign_id}/reactions/@me"),
            token,
            &SubmitReactionRequest::of(ty),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn get_campaign(server: &TestServer, admin: &str, campaign_id: Uuid) -> CampaignResponse {
    let response = server
        .get_auth(&format!("/admin/campaigns/{campaign_id}"), admin)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

/// Walk the review queue page by page until `campaign_id` turns up
async fn find_in_queue(server: &TestServer, admin: &str, campaign_id: Uuid) -> Option<QueueEntry> {
    let mut before: Option<String> = None;
    loop {
        let path = match &before {
            Some(cursor) => format!("/admin/verification-queue?limit=2&before={cursor}"),
            None => "/admin/verification-queue?limit=2".to_string(),
        };
        let response = server.get_auth(&path, admin).await.unwrap();
        let page: QueuePage = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(page.campaigns.len() <= 2);

        if let Some(entry) = page.campaigns.into_iter().find(|e| e.campaign_id == campaign_id) {
            return Some(entry);
        }
        before = Some(page.next_cursor?);
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_submit_change_and_withdraw() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token("it-admin", Role::Admin).unwrap();
    let user = server.token(&unique_user(), Role::User).unwrap();
    let campaign = create_campaign(&server, &admin).await;

    let stats = react(&server, campaign.id, &user, "still_works").await;
    assert_eq!((stats.still_works, stats.total), (1, 1));

    // Changing the type replaces the reaction
    let stats = react(&server, campaign.id, &user, "expired").await;
    assert_eq!((stats.still_works, stats.expired, stats.total), (0, 1, 1));

    let response = server
        .get_auth(&format!("/campaigns/{}/reactions/@me", campaign.id), &user)
        .await
        .unwrap();
    let own: Option<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(own.unwrap().reaction_type, "expired");

    let response = server
        .delete_auth(&format!("/campaigns/{}/reactions/@me", campaign.id), &user)
        .await
        .unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total, 0);

    // Withdrawing again is not an error
    let response = server
        .delete_auth(&format!("/campaigns/{}/reactions/@me", campaign.id), &user)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_summary_with_and_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token("it-admin", Role::Admin).unwrap();
    let user = server.token(&unique_user(), Role::User).unwrap();
    let campaign = create_campaign(&server, &admin).await;
    react(&server, campaign.id, &user, "info_incorrect").await;

    let path = format!("/campaigns/{}/reactions", campaign.id);

    let response = server.get(&path).await.unwrap();
    let anonymous: SummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(anonymous.stats.info_incorrect, 1);
    assert!(anonymous.user_reaction.is_none());

    let response = server.get_auth(&path, &user).await.unwrap();
    let mine: SummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.user_reaction.as_deref(), Some("info_incorrect"));
}

#[tokio::test]
async fn test_unknown_campaign_and_bad_type() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token("it-admin", Role::Admin).unwrap();
    let user = server.token(&unique_user(), Role::User).unwrap();

    let response = server
        .put_auth(
            &format!("/campaigns/{}/reactions/@me", Uuid::new_v4()),
            &user,
            &SubmitReactionRequest::of("expired"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_CAMPAIGN");

    let campaign = create_campaign(&server, &admin).await;
    let response = server
        .put_auth(
            &format!("/campaigns/{}/reactions/@me", campaign.id),
            &user,
            &SubmitReactionRequest::of("broken"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_REACTION_TYPE");
}

#[tokio::test]
async fn test_deleted_campaign_rejects_reactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token("it-admin", Role::Admin).unwrap();
    let user = server.token(&unique_user(), Role::User).unwrap();
    let campaign = create_campaign(&server, &admin).await;

    let response = server
        .delete_auth(&format!("/admin/campaigns/{}", campaign.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .put_auth(
            &format!("/campaigns/{}/reactions/@me", campaign.id),
            &user,
            &SubmitReactionRequest::of("still_works"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Verification Tests
// ============================================================================

#[tokio::test]
async fn test_flag_follows_threshold() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token("it-admin", Role::Admin).unwrap();
    let campaign = create_campaign(&server, &admin).await;
    assert!(!campaign.needs_verification);

    let mut users = Vec::new();
    for _ in 0..5 {
        users.push(server.token(&unique_user(), Role::User).unwrap());
    }

    // 2 still_works, 3 expired: exactly 1.5x, not flagged
    for token in &users[..2] {
        react(&server, campaign.id, token, "still_works").await;
    }
    for token in &users[2..] {
        react(&server, campaign.id, token, "expired").await;
    }
    assert!(!get_campaign(&server, &admin, campaign.id).await.needs_verification);

    // One still_works becomes expired: 1 vs 4
    react(&server, campaign.id, &users[0], "expired").await;
    assert!(get_campaign(&server, &admin, campaign.id).await.needs_verification);

    // Back below the threshold clears it
    react(&server, campaign.id, &users[0], "still_works").await;
    assert!(!get_campaign(&server, &admin, campaign.id).await.needs_verification);
}

#[tokio::test]
async fn test_admin_verification_workflow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token("it-admin", Role::Admin).unwrap();
    let user = server.token(&unique_user(), Role::User).unwrap();
    let campaign = create_campaign(&server, &admin).await;
    react(&server, campaign.id, &user, "expired").await;

    let entry = find_in_queue(&server, &admin, campaign.id).await.unwrap();
    assert_eq!(entry.title, campaign.title);
    assert_eq!(entry.stats.expired, 1);

    let recheck_path = format!("/admin/campaigns/{}/verification/recheck", campaign.id);
    let response = server.post_empty_auth(&recheck_path, &admin).await.unwrap();
    let recheck: RecheckResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(recheck.needs_verification);

    let verify_path = format!("/admin/campaigns/{}/verification/verify", campaign.id);
    let response = server.post_empty_auth(&verify_path, &admin).await.unwrap();
    let verify: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(verify.cleared);
    assert!(!get_campaign(&server, &admin, campaign.id).await.needs_verification);

    // Reactions survive verification
    let response = server
        .get_auth(&format!("/admin/campaigns/{}/reactions", campaign.id), &admin)
        .await
        .unwrap();
    let reactions: Vec<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].campaign_id, campaign.id);
}

#[tokio::test]
async fn test_admin_routes_forbid_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.token(&unique_user(), Role::User).unwrap();

    let response = server
        .post_auth("/admin/campaigns", &user, &CreateCampaignRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
