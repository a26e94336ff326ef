//! HTTP-level tests for notifications, push tokens, premium and clubs.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_auth, post_json_auth, token_for};
use roast_db::models::notification::NewNotification;
use roast_db::repositories::NotificationRepo;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

async fn seed_notification(pool: &PgPool, user: Uuid, title: &str) -> i64 {
    NotificationRepo::create(
        pool,
        &NewNotification {
            user_id: user,
            kind: "new_follower",
            title,
            body: "body",
            data: json!({}),
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn notifications_read_state(pool: PgPool) {
    let user = Uuid::new_v4();
    let token = token_for(user);
    let first = seed_notification(&pool, user, "one").await;
    seed_notification(&pool, user, "two").await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["unread"], 2);

    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notifications/{first}/read"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications?unread_only=true",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "two");

    let response = post_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/read-all",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["updated"], 1);

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/notifications/{first}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_users_notifications_are_hidden(pool: PgPool) {
    let owner = Uuid::new_v4();
    let id = seed_notification(&pool, owner, "private").await;

    let response = post_auth(
        common::build_test_app(pool),
        &format!("/api/v1/notifications/{id}/read"),
        &token_for(Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Push tokens
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn push_token_registration_is_idempotent(pool: PgPool) {
    let user = Uuid::new_v4();
    let token = token_for(user);

    for platform in ["ios", "android"] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/push-tokens",
            json!({ "token": "ExponentPushToken[abc]", "platform": platform }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/push-tokens", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["platform"], "android");

    let response = delete_auth(
        common::build_test_app(pool),
        "/api/v1/push-tokens/ExponentPushToken%5Babc%5D",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_platform_is_rejected(pool: PgPool) {
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/push-tokens",
        json!({ "token": "abc", "platform": "symbian" }),
        &token_for(Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Premium
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn premium_badge_follows_subscription(pool: PgPool) {
    let user = Uuid::new_v4();
    let token = token_for(user);
    let badge_uri = format!("/api/v1/users/{user}/badge");

    let response = get_auth(common::build_test_app(pool.clone()), &badge_uri, &token).await;
    assert_eq!(body_json(response).await["data"]["is_premium"], false);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/premium",
        json!({ "tier": "legend" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(common::build_test_app(pool.clone()), &badge_uri, &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_premium"], true);
    assert_eq!(json["data"]["badge"], "crown");

    let response = delete_auth(common::build_test_app(pool.clone()), "/api/v1/premium", &token).await;
    assert_eq!(body_json(response).await["data"]["status"], "cancelled");

    let response = get_auth(common::build_test_app(pool), &badge_uri, &token).await;
    assert_eq!(body_json(response).await["data"]["badge"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_tier_is_rejected(pool: PgPool) {
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/premium",
        json!({ "tier": "platinum" }),
        &token_for(Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Clubs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn club_membership_flow(pool: PgPool) {
    let owner = Uuid::new_v4();
    let member = Uuid::new_v4();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/clubs",
        json!({ "name": "  Roast Masters ", "description": "" }),
        &token_for(owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Roast Masters");
    assert_eq!(json["data"]["description"], serde_json::Value::Null);
    let club_id = json["data"]["id"].as_i64().unwrap();

    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/clubs/{club_id}/join"),
        &token_for(member),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["joined"], true);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/clubs",
        &token_for(member),
    )
    .await;
    assert_eq!(body_json(response).await["data"][0]["member_count"], 2);

    // The owner cannot walk out on their own club.
    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/clubs/{club_id}/leave"),
        &token_for(owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/clubs/{club_id}/leave"),
        &token_for(member),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/clubs/{club_id}/members"),
        &token_for(member),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["role"], "owner");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_club_name_is_conflict(pool: PgPool) {
    for (i, expected) in [StatusCode::CREATED, StatusCode::CONFLICT].into_iter().enumerate() {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/clubs",
            json!({ "name": "Burn Unit", "description": format!("attempt {i}") }),
            &token_for(Uuid::new_v4()),
        )
        .await;
        assert_eq!(response.status(), expected);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn joining_missing_club_is_404(pool: PgPool) {
    let response = post_auth(
        common::build_test_app(pool),
        "/api/v1/clubs/424242/join",
        &token_for(Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
