pub(crate) mod buttons;
pub(crate) mod card;
pub(crate) mod grid;
pub(crate) mod icon_button;
pub(crate) mod tab_strip;
