mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use vanta_nav::SectionId;
pub(crate) use model::SidebarViewModel;
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Navigation sidebar widget. Its visibility is owned by the layout
/// controller; the widget only tracks hover.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::into_task(self.plan(event, ctx))
    }

    /// Apply an intent and return the effects it raises, in emission order.
    pub(crate) fn plan(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Vec<SidebarEffect> {
        reducer::plan(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self, current: SectionId) -> SidebarViewModel {
        SidebarViewModel {
            current,
            hovered: self.state.hovered(),
        }
    }
}
