//! Tests for the live-input client against a mocked video platform.

use assert_matches::assert_matches;
use roast_stream::{StreamApi, StreamApiError, StreamCredentials, StreamSettings};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "acct123";
const UID: &str = "f256e6ea9341d51eea64c9454659e576";

fn credentials() -> StreamCredentials {
    StreamCredentials {
        account_id: ACCOUNT.to_string(),
        api_token: "secret-token".to_string(),
        customer_code: "cust9".to_string(),
    }
}

fn client(server: &MockServer, credentials: Option<StreamCredentials>) -> StreamApi {
    StreamApi::new(StreamSettings::new(credentials, server.uri())).unwrap()
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
                "streamKey": "key-abc"
            },
            "webRTC": {
                "url": "https://customer-cust9.cloudflarestream.com/key-abc/webRTC/publish"
            },
            "meta": { "name": "Friday roast" }
        }
    })
}

#[tokio::test]
async fn create_live_input_derives_session_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT}/stream/live_inputs")))
        .and(header("authorization", "Bearer secret-token"))
        .and(body_partial_json(json!({
            "meta": { "name": "Friday roast", "user_id": "user-1" },
            "recording": { "mode": "automatic" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(1)
        .mount(&server)
        .await;

    let session = client(&server, Some(credentials()))
        .create_live_input("Friday roast", "user-1")
        .await
        .unwrap();

    assert_eq!(session.uid, UID);
    assert_eq!(session.ingest_url, "rtmps://live.cloudflare.com:443/live/");
    assert_eq!(session.stream_key, "key-abc");
    assert_eq!(
        session.rtc_publish_url.as_deref(),
        Some("https://customer-cust9.cloudflarestream.com/key-abc/webRTC/publish")
    );
    assert_eq!(
        session.playback_url,
        format!("https://customer-cust9.cloudflarestream.com/{UID}/manifest/video.m3u8")
    );
}

#[tokio::test]
async fn upstream_failure_carries_errors() {
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

    let err = client(&server, Some(credentials()))
        .create_live_input("t", "u")
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StreamApiError::Upstream { status: 403, errors }
            if errors[0]["message"] == "Authentication error"
    );
}

#[tokio::test]
async fn success_false_with_200_is_still_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": [{ "code": 10005, "message": "quota exceeded" }]
        })))
        .mount(&server)
        .await;

    let err = client(&server, Some(credentials()))
        .create_live_input("t", "u")
        .await
        .unwrap_err();

    assert_matches!(err, StreamApiError::Upstream { status: 200, .. });
}

#[tokio::test]
async fn missing_credentials_makes_no_request() {
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

    let api = client(&server, None);
    assert!(!api.has_credentials());
    assert_matches!(
        api.create_live_input("t", "u").await,
        Err(StreamApiError::MissingCredentials)
    );
    assert_matches!(
        api.delete_live_input(UID).await,
        Err(StreamApiError::MissingCredentials)
    );
}

#[tokio::test]
async fn delete_live_input_accepts_empty_and_enveloped_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/accounts/{ACCOUNT}/stream/live_inputs/{UID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "errors": [], "messages": [], "result": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/accounts/{ACCOUNT}/stream/live_inputs/empty")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = client(&server, Some(credentials()));
    api.delete_live_input(UID).await.unwrap();
    api.delete_live_input("empty").await.unwrap();
}

#[tokio::test]
async fn delete_unknown_input_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "errors": [{ "code": 10003, "message": "Not Found" }]
        })))
        .mount(&server)
        .await;

    let err = client(&server, Some(credentials()))
        .delete_live_input("missing")
        .await
        .unwrap_err();
    assert_matches!(err, StreamApiError::Upstream { status: 404, .. });
}

#[tokio::test]
async fn non_json_error_page_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client(&server, Some(credentials()))
        .create_live_input("t", "u")
        .await
        .unwrap_err();
    assert_matches!(err, StreamApiError::Upstream { status: 502, .. });
}
