mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Duration;

pub(crate) use event::{ToastsEvent, ToastsIntent};
use iced::Task;
pub(crate) use model::ToastRequest;
use state::ToastsState;

/// Toasts widget owning the queue of visible notifications.
pub(crate) struct ToastsWidget {
    state: ToastsState,
}

impl ToastsWidget {
    /// Construct an empty queue whose toasts live for `lifetime`.
    pub(crate) fn new(lifetime: Duration) -> Self {
        Self {
            state: ToastsState::new(lifetime),
        }
    }

    /// Reduce an intent event into state updates.
    pub(crate) fn reduce(&mut self, event: ToastsIntent) -> Task<ToastsEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return read-only access to the queue for rendering.
    pub(crate) fn state(&self) -> &ToastsState {
        &self.state
    }

    /// Return whether no toast is on screen.
    pub(crate) fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
