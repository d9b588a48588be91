use iced::widget::{Column, column, row, text};
use iced::{Alignment, Length};

use super::{SectionElement, SectionProps, page, stats_grid};
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::tab_strip::{self, TabStripProps};
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{
    AUTHORITY_STATS, AuthorityRole, RECENT_ACTIONS, SYSTEM_STATUS,
};

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();
    let role = props.state.authority.role;

    let header = card::page_header(
        "Authority Dashboard",
        "Manage system authorities, user roles, and administrative functions",
        props.theme,
    );

    let roles = card::card(
        column![
            card::block_title("Role Management", props.theme),
            tab_strip::view(
                TabStripProps {
                    options: &AuthorityRole::ALL,
                    selected: role,
                    label: AuthorityRole::name,
                    theme: props.theme,
                },
                SectionsIntent::RoleSelected,
            ),
            row![
                column![
                    text(role.name()).size(17).font(BOLD).color(palette.text),
                    card::muted(role.description(), props.theme),
                ]
                .spacing(2)
                .width(Length::Fill),
                card::badge(format!("{} users", role.users()), palette.primary),
            ]
            .align_y(Alignment::Center),
            Column::with_children(role.permissions().iter().map(|permission| {
                SectionElement::from(
                    text(format!("• {permission}"))
                        .size(14)
                        .color(palette.text),
                )
            }))
            .spacing(6),
        ]
        .spacing(14),
        props.theme,
    );

    let actions = card::card(
        column![
            card::block_title("Recent Actions", props.theme),
            Column::with_children(RECENT_ACTIONS.map(|action| {
                SectionElement::from(
                    column![
                        text(action.action)
                            .size(15)
                            .font(BOLD)
                            .color(palette.text),
                        card::muted(
                            format!(
                                "{} on {} · {}",
                                action.user, action.target, action.time
                            ),
                            props.theme,
                        ),
                    ]
                    .spacing(2),
                )
            }))
            .spacing(12),
        ]
        .spacing(12),
        props.theme,
    );

    let status = card::card(
        column![
            card::block_title("System Status", props.theme),
            Column::with_children(SYSTEM_STATUS.map(|service| {
                let tint = if service.description == "Operational" {
                    palette.success
                } else {
                    palette.warning
                };
                SectionElement::from(
                    row![
                        text(service.title)
                            .size(14)
                            .color(palette.text)
                            .width(Length::Fill),
                        card::badge(service.description, tint),
                    ]
                    .align_y(Alignment::Center),
                )
            }))
            .spacing(10),
        ]
        .spacing(12),
        props.theme,
    );

    page(vec![
        header,
        stats_grid(&AUTHORITY_STATS, props),
        roles,
        actions,
        status,
    ])
}
