use iced::widget::{button, container, svg};
use iced::{Color, Element, Length, alignment};

use crate::theme::{Palette, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

const ICON_BUTTON_PADDING: f32 = 0.0;
const ICON_BUTTON_RADIUS: f32 = 8.0;

/// Render a square icon button used by the header and the menu overlay.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = *props.theme.palette();
    let (base_color, hover_color) = icon_colors(&palette);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(palette.surface_muted.into())
                },
                _ => None,
            };

            button::Style {
                background,
                border: iced::Border {
                    radius: ICON_BUTTON_RADIUS.into(),
                    ..Default::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

/// Resting and hovered icon colors.
fn icon_colors(palette: &Palette) -> (Color, Color) {
    (palette.text_muted, palette.primary)
}
