use vanta_nav::ViewportClass;

/// Maximum number of toasts shown at once; older ones are dropped.
pub(crate) const MAX_VISIBLE_TOASTS: usize = 4;
/// Interval of the expiry tick while toasts are on screen.
pub(crate) const TOAST_TICK_MS: u64 = 250;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Info,
}

/// A notification to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToastRequest {
    pub(crate) kind: ToastKind,
    pub(crate) message: String,
}

impl ToastRequest {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// Screen anchor of the toast stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastPlacement {
    BottomCenter,
    TopRight,
}

impl ToastPlacement {
    pub(crate) fn for_viewport(class: ViewportClass) -> Self {
        if class.is_mobile() {
            ToastPlacement::BottomCenter
        } else {
            ToastPlacement::TopRight
        }
    }
}

#[cfg(test)]
mod tests {
    use vanta_nav::ViewportClass;

    use super::ToastPlacement;

    #[test]
    fn given_mobile_viewport_when_placing_toasts_then_bottom_center() {
        assert_eq!(
            ToastPlacement::for_viewport(ViewportClass::Mobile),
            ToastPlacement::BottomCenter
        );
    }

    #[test]
    fn given_wider_viewports_when_placing_toasts_then_top_right() {
        for class in [ViewportClass::Tablet, ViewportClass::Desktop] {
            assert_eq!(
                ToastPlacement::for_viewport(class),
                ToastPlacement::TopRight
            );
        }
    }
}
