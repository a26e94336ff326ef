//! Best-effort in-app notifications.
//!
//! Notifications are a side effect of another action (a follow, a strike,
//! an appeal decision). A failed insert is logged and never fails the
//! action that triggered it.

use roast_db::models::notification::NewNotification;
use roast_db::repositories::NotificationRepo;
use roast_db::DbPool;

/// Insert a notification, logging instead of propagating failures.
pub async fn notify(pool: &DbPool, notification: NewNotification<'_>) {
    match NotificationRepo::create(pool, &notification).await {
        Ok(id) => tracing::debug!(
            notification_id = id,
            user_id = %notification.user_id,
            kind = notification.kind,
            "Notification created"
        ),
        Err(e) => tracing::warn!(
            user_id = %notification.user_id,
            kind = notification.kind,
            error = %e,
            "Failed to create notification"
        ),
    }
}
