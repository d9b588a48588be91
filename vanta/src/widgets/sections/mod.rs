mod event;
pub(crate) mod model;
mod reducer;
mod services;
mod state;
pub(crate) mod view;

pub(crate) use event::{SectionsEffect, SectionsEvent, SectionsIntent};
use iced::Task;
pub(crate) use reducer::SectionsCtx;
use state::SectionsState;
use vanta_nav::SectionId;

/// Sections widget owning the section-local state of every panel.
pub(crate) struct SectionsWidget {
    state: SectionsState,
}

impl SectionsWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SectionsState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SectionsIntent,
        ctx: &SectionsCtx<'_>,
    ) -> Task<SectionsEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Reset `section` to its initial presentation when it is entered.
    pub(crate) fn enter(&mut self, section: SectionId) {
        self.state.reset(section);
    }

    /// Return read-only access to the panels' state for rendering.
    pub(crate) fn state(&self) -> &SectionsState {
        &self.state
    }
}
