//! Wire types for the live-input API.

use serde::{Deserialize, Serialize};

/// Standard v4 response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: serde_json::Value,
}

/// A live input as returned by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveInput {
    pub uid: String,
    pub rtmps: RtmpsEndpoint,
    #[serde(rename = "webRTC")]
    pub web_rtc: Option<WebRtcEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RtmpsEndpoint {
    pub url: String,
    #[serde(rename = "streamKey")]
    pub stream_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebRtcEndpoint {
    pub url: String,
}

/// Everything a broadcaster needs to go live on a freshly created input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LiveSession {
    pub uid: String,
    pub ingest_url: String,
    pub stream_key: String,
    pub rtc_publish_url: Option<String>,
    pub playback_url: String,
}

impl LiveSession {
    pub(crate) fn from_input(input: LiveInput, customer_code: &str) -> Self {
        let playback_url = crate::playback_url(customer_code, &input.uid);
        Self {
            ingest_url: input.rtmps.url,
            stream_key: input.rtmps.stream_key,
            rtc_publish_url: input.web_rtc.map(|w| w.url),
            playback_url,
            uid: input.uid,
        }
    }
}
