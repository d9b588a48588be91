use vanta_nav::SectionId;

/// Width of the mobile overlay panel.
pub(crate) const OVERLAY_PANEL_WIDTH: f32 = 288.0;

/// Read-only data the sidebar needs to render.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel {
    pub(crate) current: SectionId,
    pub(crate) hovered: Option<SectionId>,
}
