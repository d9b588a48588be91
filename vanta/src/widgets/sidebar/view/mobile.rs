use iced::widget::{Space, column, container, mouse_area, row, text};
use iced::{Alignment, Background, Element, Length, Theme};

use super::{SidebarProps, menu_items};
use crate::components::primitive::card::BOLD;
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::icons;
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::OVERLAY_PANEL_WIDTH;

const PANEL_PADDING: f32 = 16.0;
const CLOSE_SIZE: f32 = 36.0;
const CLOSE_ICON_SIZE: f32 = 20.0;

/// Full-window menu overlay: a panel on the left, a dismissing scrim on the
/// rest of the window.
pub(crate) fn view(
    props: SidebarProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let close = icon_button::view(IconButtonProps {
        icon: icons::CLOSE,
        theme: props.theme,
        size: CLOSE_SIZE,
        icon_size: CLOSE_ICON_SIZE,
    })
    .map(|_| SidebarIntent::ClosePressed);

    let title_row = row![
        text("Menu").size(18).font(BOLD).color(palette.text),
        Space::new().width(Length::Fill),
        close,
    ]
    .align_y(Alignment::Center);

    let panel = container(
        column![title_row, menu_items(props)]
            .spacing(16)
            .width(Length::Fill),
    )
    .width(Length::Fixed(OVERLAY_PANEL_WIDTH))
    .height(Length::Fill)
    .padding(PANEL_PADDING)
    .style(move |_| container::Style {
        background: Some(Background::Color(palette.surface)),
        ..Default::default()
    });

    let scrim = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.scrim)),
                ..Default::default()
            }),
    )
    .on_press(SidebarIntent::ScrimPressed);

    row![panel, scrim]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
