//! Notification kind constants.
//!
//! Stored in `notifications.kind` and used by the client to pick an icon
//! and a deep link.

pub const KIND_NEW_FOLLOWER: &str = "new_follower";
pub const KIND_STRIKE_ISSUED: &str = "strike_issued";
pub const KIND_APPEAL_RESOLVED: &str = "appeal_resolved";
pub const KIND_STREAM_STARTED: &str = "stream_started";

/// Default page size for notification listing.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for notification listing.
pub const MAX_LIMIT: i64 = 100;
