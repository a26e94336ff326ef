//! Integration tests for the live-input proxy functions.
//!
//! The video platform is a wiremock server. These endpoints never touch the
//! database, so the app runs on a pool that never connects.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_dbless_app, post_json, post_json_auth, post_raw_auth, test_config,
    test_credentials, token_for, TEST_ACCOUNT, TEST_CUSTOMER_CODE,
};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UID: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90";

fn live_inputs_path() -> String {
    format!("/accounts/{TEST_ACCOUNT}/stream/live_inputs")
}

fn created_body() -> serde_json::Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": {
            "uid": UID,
            "rtmps": {
                "url": "rtmps://live.cloudflare.com:443/live/",
                "streamKey": "sk-123"
            },
            "webRTC": {
                "url": "https://customer-cust-test.cloudflarestream.com/sk-123/webRTC/publish"
            }
        }
    })
}

#[tokio::test]
async fn start_live_returns_ingest_and_playback() {
    let server = MockServer::start().await;
    let user = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path(live_inputs_path()))
        .and(header("authorization", "Bearer test-api-token"))
        .and(body_partial_json(json!({
            "meta": { "name": "Friday roast", "user_id": user.to_string() }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({ "title": "  Friday roast ", "user_id": user.to_string() }),
        &token_for(user),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["stream"]["id"], UID);
    assert_eq!(json["ingest_url"], "rtmps://live.cloudflare.com:443/live/");
    assert_eq!(json["stream_key"], "sk-123");
    assert_eq!(
        json["playback_url"],
        format!("https://customer-{TEST_CUSTOMER_CODE}.cloudflarestream.com/{UID}/manifest/video.m3u8")
    );
}

#[tokio::test]
async fn start_live_without_title_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "meta": { "name": "Live Roast" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({}),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn start_live_without_credentials_is_500_and_calls_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(None, &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({ "title": "t" }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Missing Cloudflare credentials");
}

#[tokio::test]
async fn start_live_passes_upstream_errors_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "errors": [{ "code": 10000, "message": "Authentication error" }],
            "messages": [],
            "result": null
        })))
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({ "title": "t" }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"][0]["message"], "Authentication error");
}

#[tokio::test]
async fn start_live_for_another_user_is_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({ "user_id": Uuid::new_v4().to_string() }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn start_live_rejects_overlong_title() {
    let server = MockServer::start().await;
    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({ "title": "x".repeat(121) }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().starts_with("title must be between"));
}

#[tokio::test]
async fn live_functions_require_a_token() {
    let server = MockServer::start().await;
    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));

    let response = post_json(app.clone(), "/functions/v1/start-live", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(app, "/functions/v1/stop-live", json!({ "live_input_id": UID })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn stop_live_deletes_the_input() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/{UID}", live_inputs_path())))
        .and(header("authorization", "Bearer test-api-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "errors": [], "messages": [], "result": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/stop-live",
        json!({ "live_input_id": UID }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], format!("Live input {UID} deleted"));
}

#[tokio::test]
async fn stop_live_without_id_is_400_and_calls_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let token = token_for(Uuid::new_v4());

    for body in [json!({}), json!({ "live_input_id": "   " })] {
        let response =
            post_json_auth(app.clone(), "/functions/v1/stop-live", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "live_input_id is required");
    }

    // No body at all, with and without a content type.
    for content_type in [None, Some("application/json")] {
        let response =
            post_raw_auth(app.clone(), "/functions/v1/stop-live", content_type, "", &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "live_input_id is required");
    }
}

#[tokio::test]
async fn malformed_bodies_keep_the_failure_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let token = token_for(Uuid::new_v4());

    let cases = [
        ("/functions/v1/stop-live", r#"{"live_input_id":42}"#),
        ("/functions/v1/stop-live", "{not json"),
        ("/functions/v1/start-live", r#"{"title":5}"#),
    ];
    for (uri, body) in cases {
        let response =
            post_raw_auth(app.clone(), uri, Some("application/json"), body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }
}

#[tokio::test]
async fn start_live_accepts_any_uuid_spelling_of_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(2)
        .mount(&server)
        .await;

    let user = Uuid::new_v4();
    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));

    let spellings = [
        user.hyphenated().to_string().to_uppercase(),
        user.simple().to_string(),
    ];
    for spelling in spellings {
        let response = post_json_auth(
            app.clone(),
            "/functions/v1/start-live",
            json!({ "user_id": spelling }),
            &token_for(user),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn start_live_rejects_unparseable_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/start-live",
        json!({ "user_id": "not-a-uuid" }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "user_id is not a valid UUID");
}

#[tokio::test]
async fn unreachable_platform_is_500() {
    // Nothing listens on port 1, so the connection is refused.
    let app = build_dbless_app(test_config(Some(test_credentials()), "http://127.0.0.1:1"));
    let token = token_for(Uuid::new_v4());

    let response = post_json_auth(
        app.clone(),
        "/functions/v1/start-live",
        json!({ "title": "t" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().starts_with("HTTP request failed"));

    let response = post_json_auth(
        app,
        "/functions/v1/stop-live",
        json!({ "live_input_id": UID }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn stop_live_rejects_path_like_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/stop-live",
        json!({ "live_input_id": "../../zones" }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stop_live_for_unknown_input_is_400() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "errors": [{ "code": 10003, "message": "Not Found" }]
        })))
        .mount(&server)
        .await;

    let app = build_dbless_app(test_config(Some(test_credentials()), &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/stop-live",
        json!({ "live_input_id": "gone" }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"][0]["message"], "Not Found");
}

#[tokio::test]
async fn stop_live_without_credentials_is_500() {
    let server = MockServer::start().await;
    let app = build_dbless_app(test_config(None, &server.uri()));
    let response = post_json_auth(
        app,
        "/functions/v1/stop-live",
        json!({ "live_input_id": UID }),
        &token_for(Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing Cloudflare credentials");
}
