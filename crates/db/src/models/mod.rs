pub mod appeal;
pub mod club;
pub mod comment;
pub mod follower;
pub mod moderation;
pub mod notification;
pub mod premium;
pub mod push_token;
pub mod stream;
