use crate::app::AppEvent;

/// Determines how the event loop should treat an incoming event while the
/// mobile navigation overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event without closing the overlay.
    Ignore,
    /// Close the overlay before dispatching.
    Dismiss,
}

/// Classify an incoming event when the mobile overlay is open.
pub(crate) fn overlay_guard(event: &AppEvent) -> OverlayGuard {
    use OverlayGuard::*;

    match event {
        AppEvent::Header(crate::widgets::header::HeaderEvent::Intent(
            intent,
        )) => {
            use crate::widgets::header::HeaderIntent as I;
            match intent {
                I::ToggleMenu => Allow,
                I::LogoPressed | I::LinkPressed(_) => Dismiss,
            }
        },
        AppEvent::Sections(crate::widgets::sections::SectionsEvent::Intent(
            intent,
        )) => {
            use crate::widgets::sections::SectionsIntent as I;
            match intent {
                I::VerificationFinished { .. }
                | I::ScanFinished { .. }
                | I::RefreshFinished { .. } => Allow,
                _ => Ignore,
            }
        },
        AppEvent::Header(_)
        | AppEvent::Sidebar(_)
        | AppEvent::Sections(_)
        | AppEvent::Toasts(_) => Allow,
        AppEvent::RequestSection(_)
        | AppEvent::HistoryBack
        | AppEvent::HistoryForward => Dismiss,
        AppEvent::FragmentChanged(_)
        | AppEvent::ToggleSidebar
        | AppEvent::CloseSidebar
        | AppEvent::SetThemeMode(_) => Allow,
        AppEvent::Keyboard(_) | AppEvent::Window(_) => Allow,
    }
}

#[cfg(test)]
mod tests {
    use vanta_nav::{RouteController, SectionId};

    use super::{OverlayGuard, overlay_guard};
    use crate::app::AppEvent;
    use crate::widgets::header::{HeaderEvent, HeaderIntent};
    use crate::widgets::sections::model::VerificationReport;
    use crate::widgets::sections::{SectionsEvent, SectionsIntent};
    use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

    #[test]
    fn given_content_intent_when_overlay_open_then_event_is_ignored() {
        let event = AppEvent::Sections(SectionsEvent::Intent(
            SectionsIntent::ScanRequested,
        ));

        assert_eq!(overlay_guard(&event), OverlayGuard::Ignore);
    }

    #[test]
    fn given_background_completion_when_overlay_open_then_event_passes() {
        let route = RouteController::from_fragment("verify");
        let event = AppEvent::Sections(SectionsEvent::Intent(
            SectionsIntent::VerificationFinished {
                ticket: route.ticket(),
                report: VerificationReport {
                    score: 0.3,
                    confidence: 90.0,
                    sources: 4,
                },
            },
        ));

        assert_eq!(overlay_guard(&event), OverlayGuard::Allow);
    }

    #[test]
    fn given_overlay_item_press_when_overlay_open_then_event_passes() {
        let event = AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::ItemPressed(SectionId::Settings),
        ));

        assert_eq!(overlay_guard(&event), OverlayGuard::Allow);
    }

    #[test]
    fn given_navigation_shortcut_when_overlay_open_then_overlay_is_dismissed() {
        assert_eq!(
            overlay_guard(&AppEvent::RequestSection(SectionId::Analytics)),
            OverlayGuard::Dismiss
        );
        assert_eq!(
            overlay_guard(&AppEvent::HistoryBack),
            OverlayGuard::Dismiss
        );
    }

    #[test]
    fn given_menu_toggle_when_overlay_open_then_event_passes() {
        let event =
            AppEvent::Header(HeaderEvent::Intent(HeaderIntent::ToggleMenu));

        assert_eq!(overlay_guard(&event), OverlayGuard::Allow);
    }
}
