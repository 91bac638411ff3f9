use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Info => "ℹ️",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub created: Instant,
}

/// Short-lived notifications stacked in the top-right corner.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            next_id: 1,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            kind,
            created: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(message, ToastKind::Success, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(message, ToastKind::Error, now)
    }

    /// Remove a toast before it expires. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn dismiss_latest(&mut self) -> bool {
        self.toasts.pop_back().is_some()
    }

    /// Drop toasts older than the TTL; returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created) < ttl);
        before - self.toasts.len()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.success("Copiado para a área de transferência!", t0);
        queue.error("Falhou", t0 + Duration::from_secs(3));

        assert_eq!(queue.expire(t0 + Duration::from_millis(4999)), 0);
        assert_eq!(queue.expire(t0 + Duration::from_secs(5)), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|t| t.kind), Some(ToastKind::Error));
        assert_eq!(queue.expire(t0 + Duration::from_secs(8)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_only_named_toast() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let first = queue.success("um", now);
        let second = queue.push("dois", ToastKind::Info, now);
        assert_ne!(first, second);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        let remaining: Vec<&str> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["dois"]);
    }

    #[test]
    fn default_kind_is_success() {
        assert_eq!(ToastKind::default(), ToastKind::Success);
    }
}
