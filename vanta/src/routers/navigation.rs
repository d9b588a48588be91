use iced::Task;
use vanta_nav::{RouteChange, SectionId};

use crate::app::{App, AppEvent};

/// Ask the location for `section`'s fragment. The change signal, if any,
/// comes back as [`AppEvent::FragmentChanged`].
pub(crate) fn request_section(
    app: &mut App,
    section: SectionId,
) -> Task<AppEvent> {
    signal_task(request_fragment(app, section))
}

/// Move the location to `section`'s fragment and return the change signal.
pub(crate) fn request_fragment(
    app: &mut App,
    section: SectionId,
) -> Option<String> {
    let signal = app.location.request(section.fragment());
    if signal.is_none() {
        log::debug!("`{section}` already addressed");
    }
    signal
}

pub(crate) fn history_back(app: &mut App) -> Task<AppEvent> {
    signal_task(back_fragment(app))
}

pub(crate) fn history_forward(app: &mut App) -> Task<AppEvent> {
    signal_task(forward_fragment(app))
}

/// Step the location back and return the change signal.
pub(crate) fn back_fragment(app: &mut App) -> Option<String> {
    let signal = app.location.back();
    if signal.is_none() {
        log::debug!("no earlier fragment in history");
    }
    signal
}

/// Step the location forward and return the change signal.
pub(crate) fn forward_fragment(app: &mut App) -> Option<String> {
    let signal = app.location.forward();
    if signal.is_none() {
        log::debug!("no later fragment in history");
    }
    signal
}

fn signal_task(signal: Option<String>) -> Task<AppEvent> {
    signal.map_or_else(Task::none, |fragment| {
        Task::done(AppEvent::FragmentChanged(fragment))
    })
}

/// Feed a fragment change signal to the route controller and enter the new
/// section when it moved.
pub(crate) fn fragment_changed(app: &mut App, fragment: &str) {
    match app.route.on_external_navigation_change(fragment) {
        RouteChange::Changed { from, to } => {
            log::info!("section `{from}` -> `{to}`");
            app.widgets.sections.enter(to);
        },
        RouteChange::Unchanged => {
            log::debug!("fragment `{fragment}` keeps the current section");
        },
    }
}

#[cfg(test)]
mod tests {
    use vanta_nav::SectionId;

    use super::{
        back_fragment, forward_fragment, fragment_changed, request_fragment,
    };
    use crate::app::{App, AppEvent, StartupOptions};
    use crate::config::AppConfig;

    fn start(fragment: &str) -> App {
        let options = StartupOptions::resolve(
            Some(fragment.to_string()),
            &AppConfig::default(),
        );
        App::new(options).0
    }

    /// Deliver a change signal the way the update loop would.
    fn deliver(app: &mut App, signal: Option<String>) {
        let fragment = signal.expect("location should emit a change signal");
        let _ = app.update(AppEvent::FragmentChanged(fragment));
    }

    #[test]
    fn given_section_request_when_signal_delivered_then_route_follows() {
        let mut app = start("");

        let signal = request_fragment(&mut app, SectionId::Analytics);
        assert_eq!(signal.as_deref(), Some("analytics"));
        assert_eq!(app.route.current_section(), SectionId::Home);

        deliver(&mut app, signal);
        assert_eq!(app.route.current_section(), SectionId::Analytics);
    }

    #[test]
    fn given_current_section_when_requested_again_then_no_signal_is_emitted() {
        let mut app = start("verify");

        assert_eq!(request_fragment(&mut app, SectionId::Verify), None);
    }

    #[test]
    fn given_unknown_fragment_signal_when_applied_then_home_is_shown() {
        let mut app = start("verify");

        fragment_changed(&mut app, "reports");

        assert_eq!(app.route.current_section(), SectionId::Home);
    }

    #[test]
    fn given_history_when_going_back_then_previous_section_returns() {
        let mut app = start("education");
        let signal = request_fragment(&mut app, SectionId::Community);
        deliver(&mut app, signal);

        let signal = back_fragment(&mut app);
        assert_eq!(signal.as_deref(), Some("education"));
        deliver(&mut app, signal);
        assert_eq!(app.route.current_section(), SectionId::Education);

        let signal = forward_fragment(&mut app);
        assert_eq!(signal.as_deref(), Some("community"));
        deliver(&mut app, signal);
        assert_eq!(app.route.current_section(), SectionId::Community);
    }

    #[test]
    fn given_fresh_history_when_going_back_then_no_signal_is_emitted() {
        let mut app = start("");

        assert_eq!(back_fragment(&mut app), None);
        assert_eq!(forward_fragment(&mut app), None);
    }
}
