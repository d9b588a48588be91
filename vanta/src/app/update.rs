use iced::Task;

use super::{App, AppEvent};
use crate::guards::{OverlayGuard, overlay_guard};
use crate::routers;

/// Apply the overlay guard, then route the event to its owner.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if !admit(app, &event) {
        return Task::none();
    }

    routers::route(app, event)
}

/// Run the overlay guard. Returns whether the event should be dispatched,
/// closing the overlay first when the guard says so.
fn admit(app: &mut App, event: &AppEvent) -> bool {
    if !app.layout.sidebar_visible() {
        return true;
    }

    match overlay_guard(event) {
        OverlayGuard::Allow => true,
        OverlayGuard::Ignore => false,
        OverlayGuard::Dismiss => {
            app.layout.close_sidebar();
            true
        },
    }
}

#[cfg(test)]
mod tests {
    use vanta_nav::{SectionId, ViewportClass};

    use super::admit;
    use crate::app::{App, AppEvent, StartupOptions};
    use crate::config::AppConfig;
    use crate::routers::{navigation, sidebar};
    use crate::widgets::sections::{SectionsEvent, SectionsIntent};
    use crate::widgets::sidebar::SidebarIntent;

    fn start(fragment: &str) -> App {
        let options = StartupOptions::resolve(
            Some(fragment.to_string()),
            &AppConfig::default(),
        );
        App::new(options).0
    }

    /// Dispatch an event the way the update loop does, following fragment
    /// requests through to the change signal the location emits.
    fn dispatch(app: &mut App, event: AppEvent) {
        match event {
            AppEvent::RequestSection(section) => {
                if !admit(app, &event) {
                    return;
                }
                if let Some(fragment) =
                    navigation::request_fragment(app, section)
                {
                    dispatch(app, AppEvent::FragmentChanged(fragment));
                }
            },
            event => {
                let _ = app.update(event);
            },
        }
    }

    /// Press a sidebar item and dispatch every effect the sidebar raises.
    fn press_item(app: &mut App, section: SectionId) {
        let ctx = sidebar::ctx(app);
        let effects = app
            .widgets
            .sidebar
            .plan(SidebarIntent::ItemPressed(section), &ctx);
        assert!(!effects.is_empty());

        for effect in effects {
            dispatch(app, sidebar::effect_event(effect));
        }
    }

    #[test]
    fn given_mobile_overlay_when_settings_pressed_then_overlay_closes_and_settings_shows()
     {
        let mut app = start("protection");
        let _ = app.update(AppEvent::Window(iced::window::Event::Resized(
            iced::Size::new(500.0, 800.0),
        )));
        let _ = app.update(AppEvent::ToggleSidebar);
        assert!(app.layout.sidebar_visible());

        press_item(&mut app, SectionId::Settings);

        assert_eq!(app.location.fragment(), "settings");
        assert_eq!(app.route.current_section(), SectionId::Settings);
        assert!(!app.layout.is_sidebar_open());
    }

    #[test]
    fn given_inline_sidebar_when_item_pressed_then_section_shows() {
        let mut app = start("");

        press_item(&mut app, SectionId::Analytics);

        assert_eq!(app.location.fragment(), "analytics");
        assert_eq!(app.route.current_section(), SectionId::Analytics);
    }

    #[test]
    fn given_open_overlay_when_content_intent_arrives_then_it_is_dropped() {
        let mut app = start("");
        app.layout.on_width(500.0);
        let _ = app.update(AppEvent::ToggleSidebar);

        let event = AppEvent::Sections(SectionsEvent::Intent(
            SectionsIntent::ScanRequested,
        ));

        assert!(!admit(&mut app, &event));
        assert!(app.layout.sidebar_visible());
    }

    #[test]
    fn given_desktop_when_resized_to_mobile_then_overlay_starts_closed() {
        let mut app = start("");
        app.layout.on_width(1200.0);

        let _ = app.update(AppEvent::Window(iced::window::Event::Resized(
            iced::Size::new(500.0, 800.0),
        )));

        assert_eq!(app.layout.viewport_class(), ViewportClass::Mobile);
        assert!(!app.layout.is_sidebar_open());
    }
}
