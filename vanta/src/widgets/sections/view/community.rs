use iced::widget::{Column, Row, column, row, text};
use iced::{Alignment, Length};

use super::{SectionElement, SectionProps, page, stats_grid};
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::tab_strip::{self, TabStripProps};
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{
    COMMUNITY_STATS, CommunityTab, DISCUSSIONS, EVENTS, MEMBERS,
};

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let header = card::page_header(
        "Community Hub",
        "Connect with experts, share knowledge and stay ahead of emerging \
         threats",
        props.theme,
    );

    let tabs = tab_strip::view(
        TabStripProps {
            options: &CommunityTab::ALL,
            selected: props.state.community.tab,
            label: CommunityTab::label,
            theme: props.theme,
        },
        SectionsIntent::CommunityTabSelected,
    );

    let body = match props.state.community.tab {
        CommunityTab::Discussions => discussions(props),
        CommunityTab::Members => members(props),
        CommunityTab::Events => events(props),
    };

    page(vec![
        header,
        stats_grid(&COMMUNITY_STATS, props),
        tabs,
        card::card(body, props.theme),
    ])
}

fn discussions(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let rows = DISCUSSIONS.map(|discussion| {
        SectionElement::from(
            column![
                row![
                    text(discussion.title)
                        .size(16)
                        .font(BOLD)
                        .color(palette.text)
                        .width(Length::Fill),
                    card::badge(discussion.category, palette.primary),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
                card::muted(
                    format!(
                        "{} · {} replies · {} likes · {}",
                        discussion.author,
                        discussion.replies,
                        discussion.likes,
                        discussion.time
                    ),
                    props.theme,
                ),
            ]
            .spacing(4),
        )
    });

    column![
        card::block_title("Recent Discussions", props.theme),
        Column::with_children(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}

fn members(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let rows = MEMBERS.map(|member| {
        let badges = Row::with_children(
            member
                .badges
                .iter()
                .map(|badge| card::badge(*badge, palette.success)),
        )
        .spacing(6);

        SectionElement::from(
            row![
                column![
                    text(member.name).size(16).font(BOLD).color(palette.text),
                    card::muted(member.role, props.theme),
                ]
                .spacing(2)
                .width(Length::Fill),
                column![
                    badges,
                    card::muted(
                        format!("{} contributions", member.contributions),
                        props.theme,
                    ),
                ]
                .spacing(4)
                .align_x(Alignment::End),
            ]
            .align_y(Alignment::Center),
        )
    });

    column![
        card::block_title("Top Contributors", props.theme),
        Column::with_children(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}

fn events(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let rows = EVENTS.map(|event| {
        SectionElement::from(
            row![
                column![
                    text(event.title).size(16).font(BOLD).color(palette.text),
                    card::muted(
                        format!("{} at {}", event.date, event.time),
                        props.theme,
                    ),
                ]
                .spacing(2)
                .width(Length::Fill),
                column![
                    card::badge(event.format, palette.info),
                    card::muted(
                        format!("{} attending", event.attendees),
                        props.theme,
                    ),
                ]
                .spacing(4)
                .align_x(Alignment::End),
            ]
            .align_y(Alignment::Center),
        )
    });

    column![
        card::block_title("Upcoming Events", props.theme),
        Column::with_children(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}
