//! Fire-and-forget user notifications ("toasts").
//!
//! Producers only see the [`Notifier`] trait. The GUI hands the controller a
//! clone of its [`ToastQueue`] and drains it every frame.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationLevel::Info)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationLevel::Success)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationLevel::Error)
    }

    fn new(title: impl Into<String>, description: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level,
        }
    }
}

/// Sink for notifications. No return value and no delivery guarantee.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// A queued notification with its display deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug, Default)]
struct QueueInner {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

/// Bounded, time-limited queue of toasts. Clones share the same queue.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<QueueInner>>,
    lifetime: Duration,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(4);
    pub const DEFAULT_CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self::with_limits(Self::DEFAULT_LIFETIME, Self::DEFAULT_CAPACITY)
    }

    pub fn with_limits(lifetime: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueInner::default())),
            lifetime,
            capacity: capacity.max(1),
        }
    }

    /// Drops expired toasts and returns the ones still visible, oldest first.
    pub fn active(&self, now: Instant) -> Vec<Toast> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let lifetime = self.lifetime;
        inner
            .toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
        inner.toasts.iter().cloned().collect()
    }

    pub fn dismiss(&self, id: u64) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.toasts.retain(|toast| toast.id != id);
    }

    /// Every queued toast, expired or not.
    pub fn snapshot(&self) -> Vec<Notification> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.toasts.iter().map(|t| t.notification.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_at(&self, notification: Notification, now: Instant) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        inner.toasts.push_back(Toast {
            id,
            notification,
            shown_at: now,
        });
        while inner.toasts.len() > self.capacity {
            inner.toasts.pop_front();
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        tracing::info!(title = %notification.title, level = ?notification.level, "notification");
        self.push_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let queue = ToastQueue::with_limits(Duration::from_secs(2), 10);
        let start = Instant::now();
        queue.push_at(Notification::info("a", ""), start);
        queue.push_at(Notification::info("b", ""), start + Duration::from_secs(1));

        assert_eq!(queue.active(start + Duration::from_millis(1500)).len(), 2);
        let remaining = queue.active(start + Duration::from_millis(2500));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].notification.title, "b");
        assert!(queue.active(start + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let queue = ToastQueue::with_limits(Duration::from_secs(60), 2);
        for title in ["un", "deux", "trois"] {
            queue.notify(Notification::success(title, ""));
        }
        let titles: Vec<String> = queue.snapshot().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["deux".to_string(), "trois".to_string()]);
    }

    #[test]
    fn test_dismiss_and_shared_clones() {
        let queue = ToastQueue::new();
        let producer = queue.clone();
        producer.notify(Notification::error("x", "y"));
        assert_eq!(queue.len(), 1);

        let id = queue.active(Instant::now())[0].id;
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
