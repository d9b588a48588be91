use iced::Task;
use iced::time::Instant;

use super::event::{ToastsEvent, ToastsIntent};
use super::state::ToastsState;

/// Reduce a toasts intent into state updates.
pub(crate) fn reduce(
    state: &mut ToastsState,
    event: ToastsIntent,
) -> Task<ToastsEvent> {
    match event {
        ToastsIntent::Push(request) => {
            log::debug!("toast: {}", request.message);
            state.push(request, Instant::now());
        },
        ToastsIntent::Dismiss(id) => {
            state.dismiss(id);
        },
        ToastsIntent::Tick(now) => {
            state.expire(now);
        },
    }

    Task::none()
}
