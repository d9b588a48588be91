use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::toasts::ToastsEvent;

/// Route a toasts event into widget reduction.
pub(crate) fn route(app: &mut App, event: ToastsEvent) -> Task<AppEvent> {
    match event {
        ToastsEvent::Intent(event) => {
            app.widgets.toasts.reduce(event).map(AppEvent::Toasts)
        },
    }
}
