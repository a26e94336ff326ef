//! Domain constants, validators and shared types for Roast Live.
//!
//! Nothing in this crate performs I/O. The database and API layers call
//! into these helpers so the rules live in one place.

pub mod appeals;
pub mod clubs;
pub mod comments;
pub mod error;
pub mod follow;
pub mod live;
pub mod moderation;
pub mod notifications;
pub mod premium;
pub mod push;
pub mod roles;
pub mod streams;
pub mod types;
pub mod validation;
