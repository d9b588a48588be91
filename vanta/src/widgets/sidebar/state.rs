use vanta_nav::SectionId;

/// Presentation-only sidebar state.
#[derive(Debug, Default)]
pub(crate) struct SidebarState {
    hovered: Option<SectionId>,
}

impl SidebarState {
    pub(crate) fn hovered(&self) -> Option<SectionId> {
        self.hovered
    }

    pub(crate) fn set_hovered(&mut self, section: Option<SectionId>) {
        self.hovered = section;
    }
}
