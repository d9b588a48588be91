use iced::widget::{column, container, text};
use iced::{Alignment, Background, Border, Color, Element, Font, Length};

use crate::theme::ThemeProps;

const CARD_RADIUS: f32 = 12.0;
const CARD_PADDING: f32 = 20.0;
const BADGE_RADIUS: f32 = 999.0;
const TITLE_SIZE: f32 = 30.0;
const SUBTITLE_SIZE: f32 = 16.0;
const STAT_VALUE_SIZE: f32 = 24.0;
const STAT_LABEL_SIZE: f32 = 13.0;

pub(crate) const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Bordered surface holding a block of section content.
pub(crate) fn card<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = *theme.palette();

    container(content)
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: CARD_RADIUS.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Centered page heading with a muted subtitle.
pub(crate) fn page_header<'a, M: 'a>(
    title: &'a str,
    subtitle: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = theme.palette();

    column![
        text(title).size(TITLE_SIZE).font(BOLD).color(palette.text),
        text(subtitle).size(SUBTITLE_SIZE).color(palette.text_muted),
    ]
    .spacing(8)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

/// Heading for a block inside a card.
pub(crate) fn block_title<'a, M: 'a>(
    title: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    text(title)
        .size(18)
        .font(BOLD)
        .color(theme.palette().text)
        .into()
}

/// Card with a large value over a short label.
pub(crate) fn stat_tile<'a, M: 'a>(
    value: impl text::IntoFragment<'a>,
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = theme.palette();

    card(
        column![
            text(value)
                .size(STAT_VALUE_SIZE)
                .font(BOLD)
                .color(palette.primary),
            text(label).size(STAT_LABEL_SIZE).color(palette.text_muted),
        ]
        .spacing(4)
        .width(Length::Fill)
        .align_x(Alignment::Center),
        theme,
    )
}

/// Small pill with tinted background.
pub(crate) fn badge<'a, M: 'a>(
    label: impl text::IntoFragment<'a>,
    tint: Color,
) -> Element<'a, M> {
    container(text(label).size(12).color(tint))
        .padding([2.0, 10.0])
        .style(move |_| container::Style {
            background: Some(Background::Color(tint.scale_alpha(0.15))),
            border: Border {
                radius: BADGE_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Muted secondary text.
pub(crate) fn muted<'a, M: 'a>(
    content: impl text::IntoFragment<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    text(content)
        .size(14)
        .color(theme.palette().text_muted)
        .into()
}
