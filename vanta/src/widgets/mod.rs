pub(crate) mod header;
pub(crate) mod sections;
pub(crate) mod sidebar;
pub(crate) mod toasts;
