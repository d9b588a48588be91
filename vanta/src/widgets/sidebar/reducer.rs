use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx {
    /// The menu is currently shown as the mobile overlay.
    pub(crate) overlay: bool,
}

/// Wrap planned effects into the task handed back to the app router.
pub(super) fn into_task(effects: Vec<SidebarEffect>) -> Task<SidebarEvent> {
    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(SidebarEvent::Effect(effect))),
    )
}

/// Apply a sidebar intent to state and return the effects it raises.
pub(super) fn plan(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Vec<SidebarEffect> {
    match event {
        SidebarIntent::ItemPressed(section) => {
            state.set_hovered(None);
            let mut effects = vec![SidebarEffect::RequestSection(section)];
            if ctx.overlay {
                effects.push(SidebarEffect::CloseOverlay);
            }
            effects
        },
        SidebarIntent::ItemHovered(section) => {
            state.set_hovered(section);
            Vec::new()
        },
        SidebarIntent::ScrimPressed | SidebarIntent::ClosePressed => {
            state.set_hovered(None);
            vec![SidebarEffect::CloseOverlay]
        },
    }
}
