use iced::{Color, Theme};

/// Light or dark presentation of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Resolved colors used by every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_muted: Color,
    pub(crate) border: Color,
    pub(crate) text: Color,
    pub(crate) text_muted: Color,
    pub(crate) primary: Color,
    pub(crate) primary_dark: Color,
    pub(crate) primary_soft: Color,
    pub(crate) on_primary: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
    pub(crate) info: Color,
    pub(crate) scrim: Color,
}

impl Palette {
    fn light() -> Self {
        Self {
            background: hex(0xF9FAFB),
            surface: hex(0xFFFFFF),
            surface_muted: hex(0xF3F4F6),
            border: hex(0xE5E7EB),
            text: hex(0x111827),
            text_muted: hex(0x4B5563),
            primary: hex(0x7C3AED),
            primary_dark: hex(0x5B21B6),
            primary_soft: hex(0xF3F4FF),
            on_primary: hex(0xFFFFFF),
            success: hex(0x16A34A),
            warning: hex(0xCA8A04),
            danger: hex(0xDC2626),
            info: hex(0x2563EB),
            scrim: Color {
                a: 0.5,
                ..Color::BLACK
            },
        }
    }

    fn dark() -> Self {
        Self {
            background: hex(0x0F1115),
            surface: hex(0x161822),
            surface_muted: hex(0x232530),
            border: hex(0x2F3340),
            text: hex(0xECEFF4),
            text_muted: hex(0x9CA3AF),
            primary: hex(0x8B5CF6),
            primary_dark: hex(0x4C1D95),
            primary_soft: hex(0x2A2140),
            on_primary: hex(0xFFFFFF),
            success: hex(0x98C379),
            warning: hex(0xE5C07B),
            danger: hex(0xE06C75),
            info: hex(0x4FA6ED),
            scrim: Color {
                a: 0.6,
                ..Color::BLACK
            },
        }
    }
}

/// A theme mode together with its palette.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    mode: ThemeMode,
    palette: Palette,
}

impl AppTheme {
    fn new(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        };
        Self { mode, palette }
    }

    pub(crate) fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub(crate) fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Owns the active theme for the running session.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::new(ThemeMode::default()),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn set_mode(&mut self, mode: ThemeMode) {
        if self.current.mode != mode {
            self.current = AppTheme::new(mode);
        }
    }

    /// Built-in iced theme matching the current mode.
    pub(crate) fn iced_theme(&self) -> Theme {
        match self.current.mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// Theme data passed down to views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> &'a Palette {
        self.theme.palette()
    }
}

/// Build an opaque color from a `0xRRGGBB` literal.
pub(crate) fn hex(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::from_rgb8(r, g, b)
}
