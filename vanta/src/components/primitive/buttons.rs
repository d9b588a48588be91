use iced::widget::{Space, button, container, text};
use iced::{Background, Border, Color, Element, Length, alignment};

use crate::theme::{Palette, ThemeProps};

const BUTTON_RADIUS: f32 = 8.0;
const BUTTON_PADDING_X: f32 = 16.0;
const BUTTON_PADDING_Y: f32 = 8.0;
const CHIP_RADIUS: f32 = 999.0;
const SWITCH_WIDTH: f32 = 44.0;
const SWITCH_HEIGHT: f32 = 24.0;
const SWITCH_KNOB: f32 = 18.0;
const SWITCH_INSET: f32 = 3.0;
const DISABLED_ALPHA: f32 = 0.5;

/// Visual weight of a labelled button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonKind {
    /// Filled with the primary color.
    Primary,
    /// Muted surface with a border.
    Secondary,
}

/// Labelled action button. `None` renders it disabled.
pub(crate) fn action<'a, M: Clone + 'a>(
    label: impl text::IntoFragment<'a>,
    kind: ButtonKind,
    on_press: Option<M>,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = *theme.palette();

    button(text(label).size(14))
        .padding([BUTTON_PADDING_Y, BUTTON_PADDING_X])
        .on_press_maybe(on_press)
        .style(move |_, status| {
            let (background, text_color, border_color) =
                action_colors(&palette, kind);
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    darken(background, kind)
                },
                button::Status::Disabled => background.scale_alpha(DISABLED_ALPHA),
                button::Status::Active => background,
            };
            let text_color = match status {
                button::Status::Disabled => text_color.scale_alpha(DISABLED_ALPHA),
                _ => text_color,
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    color: border_color,
                    width: if kind == ButtonKind::Secondary { 1.0 } else { 0.0 },
                    radius: BUTTON_RADIUS.into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}

/// Rounded selectable chip used by filters and tab strips.
pub(crate) fn chip<'a, M: Clone + 'a>(
    label: impl text::IntoFragment<'a>,
    active: bool,
    on_press: M,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = *theme.palette();

    button(text(label).size(14))
        .padding([6.0, 14.0])
        .on_press(on_press)
        .style(move |_, status| {
            let (background, text_color) = if active {
                (palette.primary, palette.on_primary)
            } else if matches!(status, button::Status::Hovered) {
                (palette.border, palette.text)
            } else {
                (palette.surface_muted, palette.text_muted)
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    radius: CHIP_RADIUS.into(),
                    ..Default::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

/// On/off switch.
pub(crate) fn switch<'a, M: Clone + 'a>(
    on: bool,
    on_press: M,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = *theme.palette();

    let knob = container(Space::new())
        .width(Length::Fixed(SWITCH_KNOB))
        .height(Length::Fixed(SWITCH_KNOB))
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.on_primary)),
            border: Border {
                radius: (SWITCH_KNOB / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let track = container(knob)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SWITCH_INSET)
        .align_x(if on {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        })
        .align_y(alignment::Vertical::Center);

    button(track)
        .padding(0)
        .width(Length::Fixed(SWITCH_WIDTH))
        .height(Length::Fixed(SWITCH_HEIGHT))
        .on_press(on_press)
        .style(move |_, _| button::Style {
            background: Some(Background::Color(if on {
                palette.primary
            } else {
                palette.border
            })),
            border: Border {
                radius: (SWITCH_HEIGHT / 2.0).into(),
                ..Default::default()
            },
            ..button::Style::default()
        })
        .into()
}

fn action_colors(palette: &Palette, kind: ButtonKind) -> (Color, Color, Color) {
    match kind {
        ButtonKind::Primary => {
            (palette.primary, palette.on_primary, palette.primary)
        },
        ButtonKind::Secondary => {
            (palette.surface_muted, palette.text, palette.border)
        },
    }
}

fn darken(color: Color, kind: ButtonKind) -> Color {
    let factor = if kind == ButtonKind::Secondary { 0.96 } else { 0.85 };
    Color {
        r: color.r * factor,
        g: color.g * factor,
        b: color.b * factor,
        a: color.a,
    }
}
