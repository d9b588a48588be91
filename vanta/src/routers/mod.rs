use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod header;
pub(crate) mod keyboard;
pub(crate) mod navigation;
pub(crate) mod sections;
pub(crate) mod sidebar;
pub(crate) mod toasts;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Header widget
        AppEvent::Header(event) => header::route(app, event),
        // Sidebar widget
        AppEvent::Sidebar(event) => sidebar::route(app, event),
        // Sections widget
        AppEvent::Sections(event) => sections::route(app, event),
        // Toasts widget
        AppEvent::Toasts(event) => toasts::route(app, event),
        // Navigation
        AppEvent::RequestSection(section) => {
            navigation::request_section(app, section)
        },
        AppEvent::FragmentChanged(fragment) => {
            navigation::fragment_changed(app, &fragment);
            Task::none()
        },
        AppEvent::HistoryBack => navigation::history_back(app),
        AppEvent::HistoryForward => navigation::history_forward(app),
        // Layout
        AppEvent::ToggleSidebar => {
            app.layout.toggle_sidebar();
            Task::none()
        },
        AppEvent::CloseSidebar => {
            app.layout.close_sidebar();
            Task::none()
        },
        AppEvent::SetThemeMode(mode) => {
            log::info!("theme mode set to {}", mode.label());
            app.theme_manager.set_mode(mode);
            Task::none()
        },
        // Direct operations
        AppEvent::Keyboard(event) => keyboard::route(event),
        AppEvent::Window(event) => {
            window::route(app, event);
            Task::none()
        },
    }
}
