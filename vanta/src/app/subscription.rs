use std::time::Duration;

use iced::{Subscription, window};

use super::{App, AppEvent};
use crate::widgets::toasts::model::TOAST_TICK_MS;
use crate::widgets::toasts::{ToastsEvent, ToastsIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Expiry tick only while toasts are on screen
    if !app.widgets.toasts.is_empty() {
        let tick = iced::time::every(Duration::from_millis(TOAST_TICK_MS))
            .map(|now| AppEvent::Toasts(ToastsEvent::Intent(ToastsIntent::Tick(now))));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
