use std::collections::VecDeque;
use std::time::Duration;

use iced::time::Instant;

use super::model::{MAX_VISIBLE_TOASTS, ToastKind, ToastRequest};

/// A toast on screen.
#[derive(Debug, Clone)]
pub(crate) struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
    expires_at: Instant,
}

impl Toast {
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn kind(&self) -> ToastKind {
        self.kind
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

/// Queue of visible toasts, oldest first.
#[derive(Debug)]
pub(crate) struct ToastsState {
    toasts: VecDeque<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl ToastsState {
    pub(crate) fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            lifetime,
        }
    }

    /// Show a new toast and return its id.
    pub(crate) fn push(&mut self, request: ToastRequest, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        self.toasts.push_back(Toast {
            id,
            kind: request.kind,
            message: request.message,
            expires_at: now + self.lifetime,
        });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }

        id
    }

    pub(crate) fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose lifetime has elapsed at `now`.
    pub(crate) fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub(crate) fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use super::ToastsState;
    use crate::widgets::toasts::model::{MAX_VISIBLE_TOASTS, ToastRequest};

    #[test]
    fn given_toast_when_lifetime_elapses_then_it_expires() {
        let mut state = ToastsState::new(Duration::from_millis(4000));
        let start = Instant::now();
        state.push(ToastRequest::success("Scan completed"), start);

        assert_eq!(state.expire(start + Duration::from_millis(3999)), 0);
        assert!(!state.is_empty());

        assert_eq!(state.expire(start + Duration::from_millis(4000)), 1);
        assert!(state.is_empty());
    }

    #[test]
    fn given_full_queue_when_pushing_then_oldest_is_dropped() {
        let mut state = ToastsState::new(Duration::from_secs(4));
        let now = Instant::now();
        for index in 0..=MAX_VISIBLE_TOASTS {
            state.push(ToastRequest::info(format!("toast {index}")), now);
        }

        let messages: Vec<&str> =
            state.toasts().map(|toast| toast.message()).collect();

        assert_eq!(messages.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(messages.first(), Some(&"toast 1"));
    }

    #[test]
    fn given_toast_id_when_dismissed_then_only_that_toast_is_removed() {
        let mut state = ToastsState::new(Duration::from_secs(4));
        let now = Instant::now();
        let first = state.push(ToastRequest::info("first"), now);
        let second = state.push(ToastRequest::info("second"), now);

        assert!(state.dismiss(first));
        assert!(!state.dismiss(first));

        let ids: Vec<u64> = state.toasts().map(|toast| toast.id()).collect();
        assert_eq!(ids, vec![second]);
    }
}
