use iced::widget::{Column, button, column, row, text};
use iced::{Alignment, Background, Border, Color, Length};

use super::{SectionElement, SectionProps, feature_grid, page, stats_grid};
use crate::components::primitive::buttons::{self, ButtonKind};
use crate::components::primitive::card::{self, BOLD};
use crate::theme::Palette;
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{
    PROTECTION_FEATURES, PROTECTION_STATS, ProtectionLevel, Severity, THREATS,
};

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let protection = &props.state.protection;
    let palette = props.theme.palette();

    let header = card::page_header(
        "Advanced Protection",
        "Real-time protection against misinformation, malicious content, \
         and security threats",
        props.theme,
    );

    let scan_label = if protection.scanning {
        "Scanning..."
    } else {
        "Run Scan"
    };
    let status = card::card(
        row![
            column![
                text("Protection Active")
                    .size(22)
                    .font(BOLD)
                    .color(palette.success),
                card::muted("All systems operational", props.theme),
            ]
            .spacing(4)
            .width(Length::Fill),
            buttons::action(
                scan_label,
                ButtonKind::Primary,
                (!protection.scanning).then_some(SectionsIntent::ScanRequested),
                props.theme,
            ),
        ]
        .align_y(Alignment::Center),
        props.theme,
    );

    let levels = card::card(
        column![
            card::block_title("Protection Level", props.theme),
            Column::with_children(
                ProtectionLevel::ALL
                    .map(|level| level_option(level, protection.level, props)),
            )
            .spacing(8),
        ]
        .spacing(12),
        props.theme,
    );

    let threats = card::card(
        column![
            card::block_title("Recent Threats", props.theme),
            Column::with_children(THREATS.map(|threat| {
                let tint = severity_color(palette, threat.severity);
                SectionElement::from(
                    row![
                        column![
                            text(threat.kind)
                                .size(15)
                                .font(BOLD)
                                .color(palette.text),
                            card::muted(
                                format!("{} detected · {}", threat.count, threat.time),
                                props.theme,
                            ),
                        ]
                        .spacing(2)
                        .width(Length::Fill),
                        card::badge(threat.severity.label(), tint),
                        card::badge(threat.status, palette.success),
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center),
                )
            }))
            .spacing(12),
        ]
        .spacing(12),
        props.theme,
    );

    page(vec![
        header,
        status,
        stats_grid(&PROTECTION_STATS, props),
        levels,
        threats,
        feature_grid(&PROTECTION_FEATURES, 3, props),
    ])
}

fn level_option(
    level: ProtectionLevel,
    selected: ProtectionLevel,
    props: SectionProps<'_>,
) -> SectionElement<'_> {
    let palette = *props.theme.palette();
    let active = level == selected;

    button(
        column![
            text(level.name()).size(15).font(BOLD),
            text(level.description())
                .size(13)
                .color(palette.text_muted),
        ]
        .spacing(2),
    )
    .width(Length::Fill)
    .padding(12)
    .on_press(SectionsIntent::ProtectionLevelSelected(level))
    .style(move |_, _| button::Style {
        background: Some(Background::Color(if active {
            palette.primary_soft
        } else {
            palette.surface
        })),
        text_color: palette.text,
        border: Border {
            color: if active { palette.primary } else { palette.border },
            width: if active { 2.0 } else { 1.0 },
            radius: 8.0.into(),
        },
        ..button::Style::default()
    })
    .into()
}

fn severity_color(palette: &Palette, severity: Severity) -> Color {
    match severity {
        Severity::High => palette.danger,
        Severity::Medium => palette.warning,
        Severity::Low => palette.info,
    }
}
