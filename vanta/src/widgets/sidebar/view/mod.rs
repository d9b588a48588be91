pub(crate) mod desktop;
pub(crate) mod mobile;

use iced::widget::{Column, button, mouse_area, row, svg, text};
use iced::{Alignment, Background, Border, Element, Length, Theme};
use vanta_nav::{NAVIGATION_MENU, NavigationMenuItem};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::icons;
use crate::theme::ThemeProps;

const ITEM_ICON_SIZE: f32 = 20.0;
const ITEM_SPACING: f32 = 4.0;
const ITEM_RADIUS: f32 = 8.0;

/// Props shared by the inline sidebar and the mobile overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// The eight navigation entries, current one highlighted.
fn menu_items(
    props: SidebarProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    Column::with_children(
        NAVIGATION_MENU.iter().map(|item| menu_item(item, props)),
    )
    .spacing(ITEM_SPACING)
    .width(Length::Fill)
    .into()
}

fn menu_item<'a>(
    item: &NavigationMenuItem,
    props: SidebarProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();
    let active = item.target == props.vm.current;
    let hovered = props.vm.hovered == Some(item.target);

    let (background, foreground) = if active {
        (Some(palette.primary_soft), palette.primary)
    } else if hovered {
        (Some(palette.surface_muted), palette.text)
    } else {
        (None, palette.text_muted)
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::section_icon(
        item.target,
    )))
    .width(Length::Fixed(ITEM_ICON_SIZE))
    .height(Length::Fixed(ITEM_ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(foreground),
    });

    let content = row![icon, text(item.label).size(15)]
        .spacing(12)
        .align_y(Alignment::Center);

    let entry = button(content)
        .width(Length::Fill)
        .padding([10.0, 12.0])
        .on_press(SidebarIntent::ItemPressed(item.target))
        .style(move |_, _| button::Style {
            background: background.map(Background::Color),
            text_color: foreground,
            border: Border {
                color: palette.primary,
                width: 0.0,
                radius: ITEM_RADIUS.into(),
            },
            ..button::Style::default()
        });

    mouse_area(entry)
        .on_enter(SidebarIntent::ItemHovered(Some(item.target)))
        .on_exit(SidebarIntent::ItemHovered(None))
        .into()
}
