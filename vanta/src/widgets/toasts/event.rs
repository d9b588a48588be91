use iced::time::Instant;

use super::model::ToastRequest;

/// Intent events handled by the toasts widget.
#[derive(Debug, Clone)]
pub(crate) enum ToastsIntent {
    Push(ToastRequest),
    Dismiss(u64),
    Tick(Instant),
}

/// Toasts event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ToastsEvent {
    /// Intent event reduced by the toasts widget.
    Intent(ToastsIntent),
}
