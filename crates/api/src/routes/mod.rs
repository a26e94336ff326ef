pub mod appeals;
pub mod clubs;
pub mod comments;
pub mod functions;
pub mod health;
pub mod moderation;
pub mod notifications;
pub mod premium;
pub mod push_tokens;
pub mod streams;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /streams                                         list live, record (POST)
/// /streams/{id}                                    get
/// /streams/{id}/end                                end broadcast (POST)
/// /streams/{id}/comments                           list, post
/// /comments/{id}                                   delete
///
/// /users/{id}/follow                               status, follow, unfollow
/// /users/{id}/followers                            list followers
/// /users/{id}/following                            list following
/// /users/{id}/follow-counts                        follower/following counts
/// /users/{id}/badge                                premium badge
///
/// /moderation/standing                             caller's standing
/// /moderation/strikes                              list own, issue (moderator)
/// /moderation/violations                           list own, record (moderator)
///
/// /appeals                                         list own, submit
/// /appeals/pending                                 pending queue (moderator)
/// /appeals/{id}                                    resolve (moderator, PUT)
///
/// /notifications                                   list
/// /notifications/read-all                          mark all read (POST)
/// /notifications/unread-count                      unread count
/// /notifications/{id}/read                         mark read (POST)
/// /notifications/{id}                              delete
///
/// /push-tokens                                     list, register
/// /push-tokens/{token}                             unregister
///
/// /premium                                         get, subscribe, cancel
///
/// /clubs                                           list, create
/// /clubs/{id}                                      get
/// /clubs/{id}/join                                 join (POST)
/// /clubs/{id}/leave                                leave (POST)
/// /clubs/{id}/members                              list members
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/streams", streams::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
        .nest("/moderation", moderation::router())
        .nest("/appeals", appeals::router())
        .nest("/notifications", notifications::router())
        .nest("/push-tokens", push_tokens::router())
        .nest("/premium", premium::router())
        .nest("/clubs", clubs::router())
}

/// Build the `/functions/v1` route tree for the live-input proxies.
pub fn functions_routes() -> Router<AppState> {
    functions::router()
}
