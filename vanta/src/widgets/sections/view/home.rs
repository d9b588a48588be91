use iced::widget::{column, row, text};
use iced::{Alignment, Length};
use vanta_nav::SectionId;

use super::{SectionElement, SectionProps, feature_grid, page, stats_grid};
use crate::components::primitive::buttons::{self, ButtonKind};
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::tab_strip::{self, TabStripProps};
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{HOME_FEATURES, HOME_STATS, HomeTab};

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let hero = card::card(
        column![
            text("Welcome to VANTA AI")
                .size(34)
                .font(BOLD)
                .color(palette.text),
            text(
                "Advanced AI-powered platform for information verification, \
                 security protection, and intelligent analytics",
            )
            .size(17)
            .color(palette.text_muted),
            row![
                buttons::action(
                    "Start Verifying",
                    ButtonKind::Primary,
                    Some(SectionsIntent::OpenSection(SectionId::Verify)),
                    props.theme,
                ),
                buttons::action(
                    "Learn More",
                    ButtonKind::Secondary,
                    Some(SectionsIntent::OpenSection(SectionId::Education)),
                    props.theme,
                ),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .width(Length::Fill)
        .align_x(Alignment::Center),
        props.theme,
    );

    let tabs = tab_strip::view(
        TabStripProps {
            options: &HomeTab::ALL,
            selected: props.state.home.tab,
            label: HomeTab::label,
            theme: props.theme,
        },
        SectionsIntent::HomeTabSelected,
    );

    let body = match props.state.home.tab {
        HomeTab::Overview => overview(props),
        HomeTab::Features => feature_grid(&HOME_FEATURES, 3, props),
    };

    page(vec![hero, stats_grid(&HOME_STATS, props), tabs, body])
}

fn overview(props: SectionProps<'_>) -> SectionElement<'_> {
    card::card(
        column![
            card::block_title("Platform Overview", props.theme),
            card::muted(
                "VANTA AI combines credibility analysis, real-time threat \
                 protection and analytics in one dashboard. Verify claims \
                 before they spread, keep your organisation protected, and \
                 follow trends across every channel you monitor.",
                props.theme,
            ),
            card::muted(
                "Use the navigation to jump to a tool, or start with a \
                 verification to see the platform at work.",
                props.theme,
            ),
        ]
        .spacing(10),
        props.theme,
    )
}
