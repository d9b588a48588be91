use iced::window;
use vanta_nav::SectionId;

pub(crate) const LOGO: &[u8] = include_bytes!("../assets/icons/logo.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../assets/icons/menu.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/icons/close.svg");

const HOME: &[u8] = include_bytes!("../assets/icons/home.svg");
const SHIELD: &[u8] = include_bytes!("../assets/icons/shield.svg");
const GRADUATION: &[u8] = include_bytes!("../assets/icons/graduation.svg");
const USERS: &[u8] = include_bytes!("../assets/icons/users.svg");
const ALERT: &[u8] = include_bytes!("../assets/icons/alert.svg");
const CHART: &[u8] = include_bytes!("../assets/icons/chart.svg");
const ZAP: &[u8] = include_bytes!("../assets/icons/zap.svg");
const SETTINGS: &[u8] = include_bytes!("../assets/icons/settings.svg");

const APP_ICON_SIZE: u32 = 32;
const APP_ICON_RGBA: [u8; 4] = [0x7C, 0x3A, 0xED, 0xFF];

/// Menu icon for a section.
pub(crate) fn section_icon(section: SectionId) -> &'static [u8] {
    match section {
        SectionId::Home => HOME,
        SectionId::Verify => SHIELD,
        SectionId::Education => GRADUATION,
        SectionId::Community => USERS,
        SectionId::Protection => ALERT,
        SectionId::Analytics => CHART,
        SectionId::Authority => ZAP,
        SectionId::Settings => SETTINGS,
    }
}

/// Solid brand-colored window icon.
pub(crate) fn app_icon() -> Option<window::Icon> {
    let pixels = (APP_ICON_SIZE * APP_ICON_SIZE) as usize;
    let rgba = APP_ICON_RGBA.repeat(pixels);
    match window::icon::from_rgba(rgba, APP_ICON_SIZE, APP_ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("window icon rejected: {err}");
            None
        },
    }
}
