use vanta_nav::SectionId;

/// Intent events handled by the navigation sidebar and its mobile overlay.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    ItemPressed(SectionId),
    ItemHovered(Option<SectionId>),
    ScrimPressed,
    ClosePressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    RequestSection(SectionId),
    CloseOverlay,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
