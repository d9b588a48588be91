use iced::widget::Row;
use iced::{Element, Length};

use super::buttons;
use crate::theme::ThemeProps;

const TAB_SPACING: f32 = 8.0;

/// Props for rendering a row of mutually exclusive options.
pub(crate) struct TabStripProps<'a, T> {
    pub(crate) options: &'a [T],
    pub(crate) selected: T,
    pub(crate) label: fn(T) -> &'static str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one chip per option, highlighting the selected one.
pub(crate) fn view<'a, T, M>(
    props: TabStripProps<'a, T>,
    on_select: impl Fn(T) -> M,
) -> Element<'a, M>
where
    T: Copy + PartialEq,
    M: Clone + 'a,
{
    let chips = props.options.iter().map(|&option| {
        buttons::chip(
            (props.label)(option),
            option == props.selected,
            on_select(option),
            props.theme,
        )
    });

    Row::with_children(chips)
        .spacing(TAB_SPACING)
        .width(Length::Fill)
        .wrap()
        .into()
}
