pub mod appeals;
pub mod clubs;
pub mod comments;
pub mod followers;
pub mod live;
pub mod moderation;
pub mod notifications;
pub mod premium;
pub mod push_tokens;
pub mod streams;
