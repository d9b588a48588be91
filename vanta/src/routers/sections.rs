use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sections::{
    SectionsCtx, SectionsEffect, SectionsEvent, SectionsIntent,
};
use crate::widgets::toasts::{ToastsEvent, ToastsIntent};

/// Route a sections event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SectionsEvent) -> Task<AppEvent> {
    match event {
        SectionsEvent::Intent(event) => route_intent_event(app, event),
        SectionsEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent_event(app: &mut App, event: SectionsIntent) -> Task<AppEvent> {
    let ctx = SectionsCtx { route: &app.route };
    app.widgets.sections.reduce(event, &ctx).map(AppEvent::Sections)
}

fn route_effect_event(event: SectionsEffect) -> Task<AppEvent> {
    match event {
        SectionsEffect::RequestSection(section) => {
            Task::done(AppEvent::RequestSection(section))
        },
        SectionsEffect::Notify(request) => Task::done(AppEvent::Toasts(
            ToastsEvent::Intent(ToastsIntent::Push(request)),
        )),
        SectionsEffect::SetThemeMode(mode) => {
            Task::done(AppEvent::SetThemeMode(mode))
        },
    }
}
