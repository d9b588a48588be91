use iced::widget::{Column, Row, Space, column, row, text};
use iced::{Alignment, Length};

use super::{SectionElement, SectionProps, page};
use crate::components::primitive::buttons::{self, ButtonKind};
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::tab_strip::{self, TabStripProps};
use crate::theme::ThemeMode;
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{
    NotificationKind, PRIVACY_OPTIONS, PROFILE_FIELDS, SECURITY_ACTIONS,
    SettingsTab,
};

const PRIVACY_DEFAULTS: [bool; 3] = [true, false, false];

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let settings = &props.state.settings;

    let header = card::page_header(
        "Settings & Preferences",
        "Customize your VANTA AI experience and manage your account \
         preferences",
        props.theme,
    );

    let tabs = tab_strip::view(
        TabStripProps {
            options: &SettingsTab::ALL,
            selected: settings.tab,
            label: SettingsTab::label,
            theme: props.theme,
        },
        SectionsIntent::SettingsTabSelected,
    );

    let body = match settings.tab {
        SettingsTab::Profile => profile(props),
        SettingsTab::Notifications => notifications(props),
        SettingsTab::Security => security(props),
        SettingsTab::Appearance => appearance(props),
        SettingsTab::Privacy => privacy(props),
        SettingsTab::System => system(props),
    };

    let save = buttons::action(
        "Save Changes",
        ButtonKind::Primary,
        Some(SectionsIntent::SettingsSaved),
        props.theme,
    );

    page(vec![
        header,
        tabs,
        card::card(column![body, save].spacing(20), props.theme),
    ])
}

fn profile(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let fields = PROFILE_FIELDS.map(|field| {
        SectionElement::from(
            column![
                card::muted(field.title, props.theme),
                text(field.description).size(15).color(palette.text),
            ]
            .spacing(2),
        )
    });

    column![
        card::block_title("Profile Information", props.theme),
        Column::with_children(fields).spacing(12),
    ]
    .spacing(16)
    .into()
}

fn notifications(props: SectionProps<'_>) -> SectionElement<'_> {
    let prefs = props.state.settings.notifications;

    let rows = NotificationKind::ALL.map(|kind| {
        toggle_row(
            kind.title(),
            kind.description(),
            buttons::switch(
                prefs.is_enabled(kind),
                SectionsIntent::NotificationToggled(kind),
                props.theme,
            ),
            props,
        )
    });

    column![
        card::block_title("Notification Preferences", props.theme),
        Column::with_children(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}

fn security(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let rows = SECURITY_ACTIONS.map(|entry| {
        toggle_row(
            entry.title,
            entry.description,
            card::badge("Managed by administrator", palette.text_muted),
            props,
        )
    });

    column![
        card::block_title("Security Settings", props.theme),
        Column::with_children(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}

fn appearance(props: SectionProps<'_>) -> SectionElement<'_> {
    let current = props.theme.theme.mode();

    let modes = Row::with_children([ThemeMode::Light, ThemeMode::Dark].map(
        |mode| {
            buttons::chip(
                mode.label(),
                mode == current,
                SectionsIntent::ThemeModeSelected(mode),
                props.theme,
            )
        },
    ))
    .spacing(8);

    column![
        card::block_title("Appearance", props.theme),
        card::muted("Theme", props.theme),
        modes,
        card::muted(
            "The theme applies to this session only.",
            props.theme
        ),
    ]
    .spacing(12)
    .into()
}

fn privacy(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    let rows = PRIVACY_OPTIONS.into_iter().zip(PRIVACY_DEFAULTS).map(
        |(option, enabled)| {
            let (label, tint) = if enabled {
                ("On", palette.success)
            } else {
                ("Off", palette.text_muted)
            };
            toggle_row(
                option.title,
                option.description,
                card::badge(label, tint),
                props,
            )
        },
    );

    column![
        card::block_title("Privacy Settings", props.theme),
        Column::with_children(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}

fn system(props: SectionProps<'_>) -> SectionElement<'_> {
    let palette = props.theme.palette();

    column![
        card::block_title("System Preferences", props.theme),
        toggle_row(
            "Language",
            "Interface language",
            text("English (US)").size(14).color(palette.text).into(),
            props,
        ),
        toggle_row(
            "Time Zone",
            "Used for timestamps and reports",
            text("UTC+0 (GMT)").size(14).color(palette.text).into(),
            props,
        ),
        text("Danger Zone").size(15).font(BOLD).color(palette.danger),
        card::muted(
            "Account deletion and data export are handled by your \
             administrator.",
            props.theme,
        ),
    ]
    .spacing(14)
    .into()
}

/// Title and description on the left, a control on the right.
fn toggle_row<'a>(
    title: &'static str,
    description: &'static str,
    control: SectionElement<'a>,
    props: SectionProps<'a>,
) -> SectionElement<'a> {
    row![
        column![
            text(title)
                .size(15)
                .font(BOLD)
                .color(props.theme.palette().text),
            card::muted(description, props.theme),
        ]
        .spacing(2)
        .width(Length::Fill),
        Space::new().width(Length::Fixed(12.0)),
        control,
    ]
    .align_y(Alignment::Center)
    .into()
}
