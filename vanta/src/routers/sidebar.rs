use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent_event(app, event),
        SidebarEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent_event(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let ctx = ctx(app);
    app.widgets.sidebar.reduce(event, &ctx).map(AppEvent::Sidebar)
}

/// Reduction context derived from the layout controller.
pub(crate) fn ctx(app: &App) -> SidebarCtx {
    SidebarCtx {
        overlay: app.layout.sidebar_visible(),
    }
}

fn route_effect_event(event: SidebarEffect) -> Task<AppEvent> {
    Task::done(effect_event(event))
}

/// App event a sidebar effect turns into.
pub(crate) fn effect_event(event: SidebarEffect) -> AppEvent {
    match event {
        SidebarEffect::RequestSection(section) => {
            AppEvent::RequestSection(section)
        },
        SidebarEffect::CloseOverlay => AppEvent::CloseSidebar,
    }
}
