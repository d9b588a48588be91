use crate::viewport::{ViewportClass, classify};

/// Inline sidebar width on desktop viewports.
pub const DESKTOP_SIDEBAR_WIDTH: f32 = 320.0;
/// Inline sidebar width on tablet viewports.
pub const TABLET_SIDEBAR_WIDTH: f32 = 240.0;

/// Owns the viewport class and the mobile overlay visibility.
///
/// The overlay flag only has meaning while the class is
/// [`ViewportClass::Mobile`]; leaving mobile always closes it.
#[derive(Debug, Clone)]
pub struct LayoutController {
    class: ViewportClass,
    sidebar_open: bool,
}

impl LayoutController {
    pub fn new(class: ViewportClass) -> Self {
        Self {
            class,
            sidebar_open: false,
        }
    }

    /// Build a controller from a raw viewport width.
    pub fn from_width(width_px: f32) -> Self {
        Self::new(classify(width_px))
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the mobile overlay is currently on screen.
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_open && self.class.is_mobile()
    }

    /// Whether navigation is offered through the collapsible overlay
    /// instead of the inline sidebar.
    pub fn uses_overlay_navigation(&self) -> bool {
        self.class.is_mobile()
    }

    /// Width of the inline sidebar, or `None` when navigation lives in the
    /// overlay.
    pub fn sidebar_width(&self) -> Option<f32> {
        match self.class {
            ViewportClass::Mobile => None,
            ViewportClass::Tablet => Some(TABLET_SIDEBAR_WIDTH),
            ViewportClass::Desktop => Some(DESKTOP_SIDEBAR_WIDTH),
        }
    }

    /// Classify a new width and apply it. Returns the new class only when it
    /// differs from the current one, so repeated resizes inside one bucket
    /// collapse into a single transition.
    pub fn on_width(&mut self, width_px: f32) -> Option<ViewportClass> {
        let class = classify(width_px);
        if class == self.class {
            return None;
        }

        self.on_viewport_change(class);
        Some(class)
    }

    /// Apply a viewport class transition.
    pub fn on_viewport_change(&mut self, class: ViewportClass) {
        self.class = class;
        if !class.is_mobile() {
            self.sidebar_open = false;
        }
    }

    /// Flip overlay visibility. Outside mobile there is no overlay to show,
    /// so the call is accepted and ignored.
    pub fn toggle_sidebar(&mut self) {
        if self.class.is_mobile() {
            self.sidebar_open = !self.sidebar_open;
        }
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(ViewportClass::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutController;
    use crate::viewport::ViewportClass;

    #[test]
    fn given_open_mobile_sidebar_when_viewport_leaves_mobile_then_sidebar_closes()
     {
        for target in [ViewportClass::Tablet, ViewportClass::Desktop] {
            let mut layout = LayoutController::new(ViewportClass::Mobile);
            layout.toggle_sidebar();
            layout.toggle_sidebar();
            layout.toggle_sidebar();
            assert!(layout.sidebar_visible());

            layout.on_viewport_change(target);

            assert!(!layout.is_sidebar_open());
            assert!(!layout.sidebar_visible());
        }
    }

    #[test]
    fn given_mobile_class_when_toggled_twice_then_visibility_is_restored() {
        let mut layout = LayoutController::new(ViewportClass::Mobile);
        let before = layout.is_sidebar_open();

        layout.toggle_sidebar();
        assert_ne!(layout.is_sidebar_open(), before);
        layout.toggle_sidebar();

        assert_eq!(layout.is_sidebar_open(), before);
    }

    #[test]
    fn given_desktop_class_when_toggled_then_nothing_is_shown() {
        let mut layout = LayoutController::new(ViewportClass::Desktop);

        layout.toggle_sidebar();

        assert!(!layout.sidebar_visible());
        assert!(!layout.is_sidebar_open());
    }

    #[test]
    fn given_desktop_width_when_resized_to_mobile_then_sidebar_stays_closed() {
        let mut layout = LayoutController::from_width(1200.0);
        assert_eq!(layout.viewport_class(), ViewportClass::Desktop);

        let changed = layout.on_width(500.0);

        assert_eq!(changed, Some(ViewportClass::Mobile));
        assert!(layout.uses_overlay_navigation());
        assert!(!layout.is_sidebar_open());
    }

    #[test]
    fn given_widths_in_same_bucket_when_resized_then_only_first_change_reports()
     {
        let mut layout = LayoutController::from_width(1300.0);

        assert_eq!(layout.on_width(900.0), Some(ViewportClass::Tablet));
        assert_eq!(layout.on_width(950.0), None);
        assert_eq!(layout.on_width(1024.0), None);
        assert_eq!(layout.on_width(1025.0), Some(ViewportClass::Desktop));
    }

    #[test]
    fn given_each_class_when_sidebar_width_requested_then_matches_affordance() {
        let mut layout = LayoutController::new(ViewportClass::Mobile);
        assert_eq!(layout.sidebar_width(), None);

        layout.on_viewport_change(ViewportClass::Tablet);
        assert_eq!(layout.sidebar_width(), Some(super::TABLET_SIDEBAR_WIDTH));

        layout.on_viewport_change(ViewportClass::Desktop);
        assert_eq!(layout.sidebar_width(), Some(super::DESKTOP_SIDEBAR_WIDTH));
    }
}
