//! Authentication primitives.
//!
//! - [`jwt`] -- verification of bearer tokens minted by the auth provider.

pub mod jwt;
