mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod view;

pub(crate) use event::{HeaderEffect, HeaderEvent, HeaderIntent};
use iced::Task;
pub(crate) use model::HeaderViewModel;

/// Header widget. Holds no state: what it shows comes from the route and
/// layout controllers.
pub(crate) struct HeaderWidget;

impl HeaderWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Reduce an intent event into effect events.
    pub(crate) fn reduce(&self, event: HeaderIntent) -> Task<HeaderEvent> {
        reducer::reduce(event)
    }
}
