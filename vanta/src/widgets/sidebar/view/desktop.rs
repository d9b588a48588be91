use iced::widget::{column, container, row, text};
use iced::{Background, Border, Element, Length, Theme};

use super::{SidebarProps, menu_items};
use crate::components::primitive::card::BOLD;
use crate::widgets::sidebar::event::SidebarIntent;

const SIDEBAR_PADDING: f32 = 16.0;

/// Inline sidebar shown on tablet and desktop.
pub(crate) fn view(
    props: SidebarProps<'_>,
    width: f32,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let heading = column![
        text("Navigation").size(16).font(BOLD).color(palette.text),
        text("Explore VANTA AI features")
            .size(13)
            .color(palette.text_muted),
    ]
    .spacing(4);

    let panel = container(
        column![heading, menu_items(props)]
            .spacing(20)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(SIDEBAR_PADDING)
    .style(move |_| container::Style {
        background: Some(Background::Color(palette.surface)),
        ..Default::default()
    });

    let edge = container(iced::widget::Space::new())
        .width(Length::Fixed(1.0))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.border)),
            border: Border::default(),
            ..Default::default()
        });

    row![panel, edge]
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .into()
}
