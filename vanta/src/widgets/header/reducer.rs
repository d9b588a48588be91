use iced::Task;
use vanta_nav::SectionId;

use super::event::{HeaderEffect, HeaderEvent, HeaderIntent};

/// Reduce a header intent into effect events.
pub(crate) fn reduce(event: HeaderIntent) -> Task<HeaderEvent> {
    Task::done(HeaderEvent::Effect(effect_for(event)))
}

fn effect_for(event: HeaderIntent) -> HeaderEffect {
    match event {
        HeaderIntent::ToggleMenu => HeaderEffect::ToggleSidebar,
        HeaderIntent::LogoPressed => {
            HeaderEffect::RequestSection(SectionId::Home)
        },
        HeaderIntent::LinkPressed(section) => {
            HeaderEffect::RequestSection(section)
        },
    }
}
