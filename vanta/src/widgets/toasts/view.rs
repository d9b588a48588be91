use iced::widget::{Column, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme, alignment};

use super::event::ToastsIntent;
use super::model::{ToastKind, ToastPlacement};
use super::state::{Toast, ToastsState};
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::icons;
use crate::theme::{Palette, ThemeProps};

const TOAST_WIDTH: f32 = 340.0;
const TOAST_SPACING: f32 = 8.0;
const TOAST_MARGIN: f32 = 16.0;
const TOAST_RADIUS: f32 = 10.0;
const TOAST_ACCENT_WIDTH: f32 = 4.0;
const CLOSE_SIZE: f32 = 24.0;
const CLOSE_ICON_SIZE: f32 = 14.0;

/// Props for the toast layer.
#[derive(Clone, Copy)]
pub(crate) struct ToastsProps<'a> {
    pub(crate) state: &'a ToastsState,
    pub(crate) placement: ToastPlacement,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the toast stack anchored according to `placement`.
pub(crate) fn view(
    props: ToastsProps<'_>,
) -> Element<'_, ToastsIntent, Theme, iced::Renderer> {
    let items = props
        .state
        .toasts()
        .map(|toast| toast_view(toast, props.theme));

    let stack = Column::with_children(items)
        .spacing(TOAST_SPACING)
        .width(Length::Fixed(TOAST_WIDTH));

    let (align_x, align_y) = match props.placement {
        ToastPlacement::BottomCenter => {
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        },
        ToastPlacement::TopRight => {
            (alignment::Horizontal::Right, alignment::Vertical::Top)
        },
    };

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(TOAST_MARGIN)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

fn toast_view<'a>(
    toast: &'a Toast,
    theme: ThemeProps<'a>,
) -> Element<'a, ToastsIntent, Theme, iced::Renderer> {
    let palette = *theme.palette();
    let accent = accent_color(&palette, toast.kind());
    let id = toast.id();

    let accent_bar = container(iced::widget::Space::new())
        .width(Length::Fixed(TOAST_ACCENT_WIDTH))
        .height(Length::Fixed(20.0))
        .style(move |_| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let close = icon_button::view(IconButtonProps {
        icon: icons::CLOSE,
        theme,
        size: CLOSE_SIZE,
        icon_size: CLOSE_ICON_SIZE,
    })
    .map(move |_| ToastsIntent::Dismiss(id));

    let content = row![
        accent_bar,
        text(toast.message())
            .size(14)
            .color(palette.text)
            .width(Length::Fill),
        close,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding([10.0, 12.0])
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: TOAST_RADIUS.into(),
            },
            shadow: iced::Shadow {
                color: Color {
                    a: 0.15,
                    ..Color::BLACK
                },
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}

fn accent_color(palette: &Palette, kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette.success,
        ToastKind::Info => palette.info,
    }
}

#[cfg(test)]
mod tests {
    use super::accent_color;
    use crate::theme::{ThemeManager, ThemeMode};
    use crate::widgets::toasts::model::ToastKind;

    #[test]
    fn given_each_toast_kind_when_coloring_then_accent_follows_palette() {
        let mut manager = ThemeManager::new();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            manager.set_mode(mode);
            let palette = manager.current().palette();

            assert_eq!(
                accent_color(palette, ToastKind::Success),
                palette.success
            );
            assert_eq!(accent_color(palette, ToastKind::Info), palette.info);
        }
    }
}
