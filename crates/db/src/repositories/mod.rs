//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod appeal_repo;
pub mod club_repo;
pub mod comment_repo;
pub mod follower_repo;
pub mod moderation_repo;
pub mod notification_repo;
pub mod premium_repo;
pub mod push_token_repo;
pub mod stream_repo;

pub use appeal_repo::AppealRepo;
pub use club_repo::ClubRepo;
pub use comment_repo::CommentRepo;
pub use follower_repo::FollowerRepo;
pub use moderation_repo::ModerationRepo;
pub use notification_repo::NotificationRepo;
pub use premium_repo::PremiumRepo;
pub use push_token_repo::PushTokenRepo;
pub use stream_repo::StreamRepo;
