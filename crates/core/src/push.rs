//! Push notification device token rules.

use crate::error::CoreError;
use crate::validation::{one_of, trimmed_text};

pub const PLATFORM_IOS: &str = "ios";
pub const PLATFORM_ANDROID: &str = "android";
pub const PLATFORM_WEB: &str = "web";

pub const VALID_PLATFORMS: &[&str] = &[PLATFORM_IOS, PLATFORM_ANDROID, PLATFORM_WEB];

/// Maximum device token length (characters).
pub const MAX_TOKEN_LENGTH: u64 = 512;

pub fn validate_platform(platform: &str) -> Result<(), CoreError> {
    one_of("platform", platform, VALID_PLATFORMS)
}

/// Validate and normalise a device token.
pub fn validate_token(token: &str) -> Result<String, CoreError> {
    trimmed_text("token", token, 1, MAX_TOKEN_LENGTH)
}
