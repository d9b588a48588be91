use vanta_nav::{SectionId, SectionTicket};

use super::model::{
    AuthorityRole, CommunityTab, CourseCategory, HomeTab, NotificationKind,
    ProtectionLevel, SettingsTab, TimeRange, VerificationReport,
};
use crate::theme::ThemeMode;
use crate::widgets::toasts::ToastRequest;

/// Intent events handled by the section panels.
#[derive(Debug, Clone)]
pub(crate) enum SectionsIntent {
    // Home
    HomeTabSelected(HomeTab),
    OpenSection(SectionId),
    // Verify
    VerifyInputChanged(String),
    VerifySubmitted,
    VerificationFinished {
        ticket: SectionTicket,
        report: VerificationReport,
    },
    // Education
    CategorySelected(CourseCategory),
    // Community
    CommunityTabSelected(CommunityTab),
    // Protection
    ProtectionLevelSelected(ProtectionLevel),
    ScanRequested,
    ScanFinished { ticket: SectionTicket },
    // Analytics
    TimeRangeSelected(TimeRange),
    RefreshRequested,
    RefreshFinished { ticket: SectionTicket },
    ExportRequested,
    // Authority
    RoleSelected(AuthorityRole),
    // Settings
    SettingsTabSelected(SettingsTab),
    NotificationToggled(NotificationKind),
    ThemeModeSelected(ThemeMode),
    SettingsSaved,
}

/// Effect events produced by the sections reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SectionsEffect {
    RequestSection(SectionId),
    Notify(ToastRequest),
    SetThemeMode(ThemeMode),
}

/// Sections event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SectionsEvent {
    /// Intent event reduced by the sections widget.
    Intent(SectionsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SectionsEffect),
}
