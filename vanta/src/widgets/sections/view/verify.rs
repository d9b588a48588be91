use iced::widget::{column, row, text, text_input};
use iced::{Color, Length};

use super::{SectionElement, SectionProps, page};
use crate::components::primitive::buttons::{self, ButtonKind};
use crate::components::primitive::card::{self, BOLD};
use crate::theme::Palette;
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{Verdict, VerificationReport};
use crate::widgets::sections::services;

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let verify = &props.state.verify;

    let header = card::page_header(
        "Information Verification",
        "Use advanced AI to verify the credibility and accuracy of \
         information in real-time",
        props.theme,
    );

    let label = if verify.analyzing {
        "Analyzing..."
    } else {
        "Verify Information"
    };

    let input = card::card(
        column![
            text("Enter text to verify")
                .size(14)
                .color(props.theme.palette().text),
            text_input(
                "Paste the information you want to verify here...",
                &verify.input,
            )
            .on_input(SectionsIntent::VerifyInputChanged)
            .on_submit(SectionsIntent::VerifySubmitted)
            .padding(12)
            .size(15),
            buttons::action(
                label,
                ButtonKind::Primary,
                verify
                    .can_submit()
                    .then_some(SectionsIntent::VerifySubmitted),
                props.theme,
            ),
        ]
        .spacing(12),
        props.theme,
    );

    let mut blocks = vec![header, input];
    if let Some(report) = verify.report {
        blocks.push(result(report, props));
    }
    page(blocks)
}

fn result(
    report: VerificationReport,
    props: SectionProps<'_>,
) -> SectionElement<'_> {
    let palette = props.theme.palette();
    let verdict = services::verdict(report.score);
    let tint = verdict_color(palette, verdict);

    card::card(
        column![
            card::block_title("Analysis Results", props.theme),
            row![
                text(verdict.label()).size(22).font(BOLD).color(tint),
                card::badge(
                    format!("{:.0}% credibility", report.score * 100.0),
                    tint
                ),
            ]
            .spacing(12),
            card::muted(verdict.summary(), props.theme),
            row![
                metric(
                    "Confidence",
                    format!("{:.1}%", report.confidence),
                    props
                ),
                metric("Sources Checked", report.sources.to_string(), props),
            ]
            .spacing(24)
            .width(Length::Fill),
        ]
        .spacing(12),
        props.theme,
    )
}

fn metric<'a>(
    label: &'a str,
    value: String,
    props: SectionProps<'a>,
) -> SectionElement<'a> {
    column![
        card::muted(label, props.theme),
        text(value)
            .size(18)
            .font(BOLD)
            .color(props.theme.palette().text),
    ]
    .spacing(2)
    .into()
}

fn verdict_color(palette: &Palette, verdict: Verdict) -> Color {
    match verdict {
        Verdict::HighlyCredible => palette.success,
        Verdict::NeedsVerification => palette.warning,
        Verdict::PotentiallyFalse => palette.danger,
    }
}
