use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::header::{HeaderEffect, HeaderEvent, HeaderIntent};

/// Route a header event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: HeaderEvent) -> Task<AppEvent> {
    match event {
        HeaderEvent::Intent(event) => route_intent_event(app, event),
        HeaderEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent_event(app: &mut App, event: HeaderIntent) -> Task<AppEvent> {
    app.widgets.header.reduce(event).map(AppEvent::Header)
}

fn route_effect_event(event: HeaderEffect) -> Task<AppEvent> {
    match event {
        HeaderEffect::ToggleSidebar => Task::done(AppEvent::ToggleSidebar),
        HeaderEffect::RequestSection(section) => {
            Task::done(AppEvent::RequestSection(section))
        },
    }
}
