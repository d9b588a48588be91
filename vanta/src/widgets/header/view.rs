use iced::widget::{Row, Space, button, column, container, row, svg, text};
use iced::{Alignment, Background, Element, Length, Theme};
use vanta_nav::HEADER_LINKS;

use super::event::HeaderIntent;
use super::model::{BRAND_TITLE, HEADER_HEIGHT, HeaderViewModel};
use crate::components::primitive::card::BOLD;
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::icons;
use crate::theme::ThemeProps;

const LOGO_SIZE: f32 = 28.0;
const TOGGLE_SIZE: f32 = 40.0;
const TOGGLE_ICON_SIZE: f32 = 22.0;
const HEADER_PADDING_X: f32 = 16.0;
const LINK_SPACING: f32 = 4.0;

/// Props for rendering the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) vm: HeaderViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the top bar with brand, links or the mobile menu toggle.
pub(crate) fn view(
    props: HeaderProps<'_>,
) -> Element<'_, HeaderIntent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary),
        });

    let brand = button(
        row![
            logo,
            text(BRAND_TITLE).size(20).font(BOLD).color(palette.text)
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(0)
    .on_press(HeaderIntent::LogoPressed)
    .style(|_, _| button::Style::default());

    let trailing: Element<'_, HeaderIntent, Theme, iced::Renderer> =
        if props.vm.compact {
            let icon = if props.vm.menu_open {
                icons::CLOSE
            } else {
                icons::MENU
            };
            icon_button::view(IconButtonProps {
                icon,
                theme: props.theme,
                size: TOGGLE_SIZE,
                icon_size: TOGGLE_ICON_SIZE,
            })
            .map(|_| HeaderIntent::ToggleMenu)
        } else {
            links(props)
        };

    let bar = row![brand, Space::new().width(Length::Fill), trailing]
        .align_y(Alignment::Center)
        .padding([0.0, HEADER_PADDING_X])
        .height(Length::Fixed(HEADER_HEIGHT));

    let rule = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.border)),
            ..Default::default()
        });

    container(column![bar, rule])
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.surface)),
            ..Default::default()
        })
        .into()
}

fn links(
    props: HeaderProps<'_>,
) -> Element<'_, HeaderIntent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let items = HEADER_LINKS.map(|link| {
        let active = link.target == props.vm.current;
        let entry = button(text(link.label).size(14))
            .padding([6.0, 12.0])
            .on_press(HeaderIntent::LinkPressed(link.target))
            .style(move |_, status| {
                let text_color = if active
                    || matches!(status, button::Status::Hovered)
                {
                    palette.primary
                } else {
                    palette.text_muted
                };
                button::Style {
                    background: active
                        .then_some(Background::Color(palette.primary_soft)),
                    text_color,
                    border: iced::Border {
                        radius: 6.0.into(),
                        ..Default::default()
                    },
                    ..button::Style::default()
                }
            });
        Element::from(entry)
    });

    Row::with_children(items)
        .spacing(LINK_SPACING)
        .align_y(Alignment::Center)
        .into()
}
