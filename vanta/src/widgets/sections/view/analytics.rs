use iced::widget::{Column, Space, column, row, text};
use iced::{Alignment, Length};

use super::{SectionElement, SectionProps, page};
use crate::components::primitive::buttons::{self, ButtonKind};
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::grid::{columns_for, grid};
use crate::components::primitive::tab_strip::{self, TabStripProps};
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{METRICS, RECENT_ACTIVITY, TimeRange};

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let analytics = &props.state.analytics;
    let palette = props.theme.palette();

    let header = card::page_header(
        "Analytics Dashboard",
        "Comprehensive insights and analytics for your AI-powered security \
         platform",
        props.theme,
    );

    let refresh_label = if analytics.loading {
        "Refreshing..."
    } else {
        "Refresh"
    };
    let controls = card::card(
        column![
            tab_strip::view(
                TabStripProps {
                    options: &TimeRange::ALL,
                    selected: analytics.range,
                    label: TimeRange::label,
                    theme: props.theme,
                },
                SectionsIntent::TimeRangeSelected,
            ),
            row![
                buttons::action(
                    refresh_label,
                    ButtonKind::Secondary,
                    (!analytics.loading)
                        .then_some(SectionsIntent::RefreshRequested),
                    props.theme,
                ),
                buttons::action(
                    "Export",
                    ButtonKind::Primary,
                    Some(SectionsIntent::ExportRequested),
                    props.theme,
                ),
            ]
            .spacing(8),
        ]
        .spacing(12),
        props.theme,
    );

    let metrics: Vec<SectionElement<'_>> = METRICS
        .map(|metric| {
            card::card(
                column![
                    card::muted(metric.title, props.theme),
                    row![
                        text(metric.value)
                            .size(24)
                            .font(BOLD)
                            .color(palette.text),
                        Space::new().width(Length::Fill),
                        card::badge(metric.change, palette.success),
                    ]
                    .align_y(Alignment::Center),
                ]
                .spacing(6),
                props.theme,
            )
        })
        .into_iter()
        .collect();

    let activity = card::card(
        column![
            card::block_title("Recent Activity", props.theme),
            card::muted(
                format!("Showing the last {}", analytics.range.label()),
                props.theme,
            ),
            Column::with_children(RECENT_ACTIVITY.map(|entry| {
                SectionElement::from(
                    row![
                        text(entry.title)
                            .size(14)
                            .color(palette.text)
                            .width(Length::Fill),
                        card::muted(entry.description, props.theme),
                    ]
                    .spacing(8),
                )
            }))
            .spacing(10),
        ]
        .spacing(12),
        props.theme,
    );

    page(vec![
        header,
        controls,
        grid(metrics, columns_for(props.viewport, 4)),
        activity,
    ])
}
