// src/notify.rs
//
// Toast scheduler: an in-process list of active banners, each with its own
// independent expiry timer. No coalescing or rate limiting of duplicates.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Toast, ToastKind};

/// Every toast lives exactly this long unless dismissed earlier.
pub const TOAST_TTL: Duration = Duration::from_millis(5000);

#[derive(Clone, Default)]
pub struct Notifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and schedules its removal after exactly `TOAST_TTL`.
    /// Returns the fresh identifier so the caller can dismiss it earlier.
    pub async fn add(
        &self,
        kind: ToastKind,
        title: String,
        message: String,
        icon: String,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let toast = Toast {
            id: id.clone(),
            kind,
            title,
            message,
            icon,
        };
        self.toasts.lock().await.push(toast);

        let scheduler = self.clone();
        let expired = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            scheduler.remove(&expired).await;
        });

        id
    }

    /// Idempotent: removing an id that is already gone is a no-op, so an
    /// expiry timer firing after a manual dismissal changes nothing.
    pub async fn remove(&self, id: &str) -> bool {
        let mut toasts = self.toasts.lock().await;
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    pub async fn list(&self) -> Vec<Toast> {
        self.toasts.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_ttl() {
        let notifier = Notifier::new();
        notifier
            .add(
                ToastKind::Security,
                "تنبيه".to_string(),
                "رسالة".to_string(),
                "🛡️".to_string(),
            )
            .await;
        assert_eq!(notifier.list().await.len(), 1);

        // Just short of the deadline the toast is still visible.
        tokio::time::sleep(Duration::from_millis(4900)).await;
        assert_eq!(notifier.list().await.len(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(notifier.list().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismissal_makes_expiry_a_noop() {
        let notifier = Notifier::new();
        let id = notifier
            .add(
                ToastKind::Order,
                "order".to_string(),
                "msg".to_string(),
                "🛒".to_string(),
            )
            .await;

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(notifier.remove(&id).await);
        assert!(!notifier.remove(&id).await); // second removal: no-op

        // Let the original 5s timer fire; nothing to remove, nothing breaks.
        tokio::time::sleep(Duration::from_millis(4500)).await;
        assert!(notifier.list().await.is_empty());
        assert!(!notifier.remove(&id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn timers_are_independent_per_toast() {
        let notifier = Notifier::new();
        notifier
            .add(ToastKind::Promo, "a".into(), "a".into(), "🎁".into())
            .await;
        tokio::time::sleep(Duration::from_millis(3000)).await;
        let second = notifier
            .add(ToastKind::Promo, "b".into(), "b".into(), "🎁".into())
            .await;

        // First expires at t=5s, second at t=8s.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        let remaining = notifier.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(notifier.list().await.is_empty());
    }
}
