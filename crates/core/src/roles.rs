//! Well-known token role constants.
//!
//! These match the `role` claim minted by the auth provider.

/// Regular signed-in user.
pub const ROLE_AUTHENTICATED: &str = "authenticated";

/// Server-side moderation tooling. Allowed to record violations, issue
/// strikes and resolve appeals.
pub const ROLE_SERVICE: &str = "service_role";

/// Whether the given role may perform moderation actions.
pub fn is_moderator(role: &str) -> bool {
    role == ROLE_SERVICE
}
