use vanta_nav::SectionId;

/// Intent events handled by the header presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum HeaderIntent {
    ToggleMenu,
    LogoPressed,
    LinkPressed(SectionId),
}

/// Effect events produced by the header reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderEffect {
    ToggleSidebar,
    RequestSection(SectionId),
}

/// Header event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum HeaderEvent {
    /// Intent event reduced by the header widget.
    Intent(HeaderIntent),
    /// External effect orchestrated by app-level routing.
    Effect(HeaderEffect),
}
