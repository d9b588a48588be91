use crate::section::SectionId;

/// A static navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationMenuItem {
    pub label: &'static str,
    pub target: SectionId,
}

impl NavigationMenuItem {
    const fn new(label: &'static str, target: SectionId) -> Self {
        Self { label, target }
    }

    /// Fragment this item requests when activated.
    pub fn fragment(&self) -> &'static str {
        self.target.fragment()
    }
}

/// Sidebar entries, shared by the inline sidebar and the mobile overlay.
pub const NAVIGATION_MENU: [NavigationMenuItem; 8] = [
    NavigationMenuItem::new("Home", SectionId::Home),
    NavigationMenuItem::new("Verify Information", SectionId::Verify),
    NavigationMenuItem::new("Education", SectionId::Education),
    NavigationMenuItem::new("Community", SectionId::Community),
    NavigationMenuItem::new("Protection", SectionId::Protection),
    NavigationMenuItem::new("Analytics", SectionId::Analytics),
    NavigationMenuItem::new("Authority", SectionId::Authority),
    NavigationMenuItem::new("Settings", SectionId::Settings),
];

/// Inline header links shown outside the mobile layout.
pub const HEADER_LINKS: [NavigationMenuItem; 5] = [
    NavigationMenuItem::new("Home", SectionId::Home),
    NavigationMenuItem::new("Verify", SectionId::Verify),
    NavigationMenuItem::new("Education", SectionId::Education),
    NavigationMenuItem::new("Analytics", SectionId::Analytics),
    NavigationMenuItem::new("Settings", SectionId::Settings),
];
