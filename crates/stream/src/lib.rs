//! Client for the video platform's live-input API.
//!
//! Creates and deletes live inputs (RTMPS/WebRTC ingest endpoints) on
//! Cloudflare Stream and derives the HLS playback URL for a broadcast.

pub mod api;
pub mod config;
pub mod models;

pub use api::{StreamApi, StreamApiError};
pub use config::{StreamCredentials, StreamSettings};
pub use models::LiveSession;

/// HLS manifest URL for a live input.
///
/// `customer_code` is the subdomain code of the account's delivery host.
pub fn playback_url(customer_code: &str, uid: &str) -> String {
    format!("https://customer-{customer_code}.cloudflarestream.com/{uid}/manifest/video.m3u8")
}
