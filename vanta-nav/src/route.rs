use crate::section::SectionId;

/// Outcome of feeding an address-fragment signal to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteChange {
    Unchanged,
    Changed { from: SectionId, to: SectionId },
}

impl RouteChange {
    pub fn is_changed(self) -> bool {
        matches!(self, RouteChange::Changed { .. })
    }
}

/// Proof that a piece of section-local work was started while `section`
/// was current. It stays valid until the next effective navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTicket {
    section: SectionId,
    generation: u64,
}

impl SectionTicket {
    pub fn section(&self) -> SectionId {
        self.section
    }
}

/// Single source of truth for the displayed section.
#[derive(Debug, Clone)]
pub struct RouteController {
    current: SectionId,
    generation: u64,
}

impl RouteController {
    /// Initialize from the startup fragment.
    pub fn from_fragment(raw: &str) -> Self {
        let current = SectionId::from_fragment(raw);
        log::debug!("initial section `{current}` from fragment `{raw}`");
        Self {
            current,
            generation: 0,
        }
    }

    pub fn current_section(&self) -> SectionId {
        self.current
    }

    /// Apply an address-fragment change signal.
    ///
    /// This is the only way the current section moves. Unknown fragments
    /// resolve to home; a fragment naming the current section is a no-op.
    pub fn on_external_navigation_change(&mut self, raw: &str) -> RouteChange {
        let next = SectionId::from_fragment(raw);
        if next == self.current {
            return RouteChange::Unchanged;
        }

        let from = self.current;
        self.current = next;
        self.generation = self.generation.wrapping_add(1);
        RouteChange::Changed { from, to: next }
    }

    /// Issue a ticket for work started in the current section.
    pub fn ticket(&self) -> SectionTicket {
        SectionTicket {
            section: self.current,
            generation: self.generation,
        }
    }

    /// Whether work started under `ticket` may still touch the screen.
    pub fn is_current(&self, ticket: &SectionTicket) -> bool {
        ticket.section == self.current && ticket.generation == self.generation
    }
}

impl Default for RouteController {
    fn default() -> Self {
        Self::from_fragment("")
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteChange, RouteController};
    use crate::section::SectionId;

    #[test]
    fn given_unknown_fragments_when_signalled_then_current_is_home() {
        for raw in ["", "HOME", "Settings", "#", "reports", "verify/1"] {
            let mut route = RouteController::from_fragment("analytics");
            route.on_external_navigation_change(raw);
            assert_eq!(route.current_section(), SectionId::Home, "{raw}");
        }
    }

    #[test]
    fn given_valid_fragment_when_signalled_repeatedly_then_change_happens_once()
    {
        for section in SectionId::ALL {
            let mut route = RouteController::default();
            let first = route.on_external_navigation_change(section.fragment());
            let ticket = route.ticket();
            let second =
                route.on_external_navigation_change(section.fragment());

            assert_eq!(route.current_section(), section);
            assert_eq!(first.is_changed(), section != SectionId::Home);
            assert_eq!(second, RouteChange::Unchanged);
            assert!(route.is_current(&ticket));
        }
    }

    #[test]
    fn given_startup_fragment_when_initialized_then_section_matches() {
        let route = RouteController::from_fragment("protection");
        assert_eq!(route.current_section(), SectionId::Protection);

        let route = RouteController::from_fragment("#protection");
        assert_eq!(route.current_section(), SectionId::Protection);
    }

    #[test]
    fn given_rapid_signals_when_processed_in_order_then_last_write_wins() {
        let mut route = RouteController::default();
        for raw in ["verify", "bogus", "community", "authority"] {
            route.on_external_navigation_change(raw);
        }
        assert_eq!(route.current_section(), SectionId::Authority);
    }

    #[test]
    fn given_ticket_when_navigating_away_and_back_then_ticket_is_stale() {
        let mut route = RouteController::from_fragment("verify");
        let ticket = route.ticket();
        assert_eq!(ticket.section(), SectionId::Verify);

        route.on_external_navigation_change("home");
        assert!(!route.is_current(&ticket));

        route.on_external_navigation_change("verify");
        assert!(!route.is_current(&ticket));
        assert!(route.is_current(&route.ticket()));
    }

    #[test]
    fn given_change_when_reported_then_carries_both_endpoints() {
        let mut route = RouteController::from_fragment("home");

        let change = route.on_external_navigation_change("#settings");

        assert_eq!(
            change,
            RouteChange::Changed {
                from: SectionId::Home,
                to: SectionId::Settings,
            }
        );
    }
}
