use vanta_nav::SectionId;

pub(crate) const HEADER_HEIGHT: f32 = 64.0;
pub(crate) const BRAND_TITLE: &str = "VANTA AI";

/// Read-only data the header needs to render.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderViewModel {
    /// Show the menu toggle instead of inline links.
    pub(crate) compact: bool,
    pub(crate) menu_open: bool,
    pub(crate) current: SectionId,
}
