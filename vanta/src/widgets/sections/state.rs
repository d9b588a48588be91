use vanta_nav::SectionId;

use super::model::{
    AuthorityRole, CommunityTab, CourseCategory, HomeTab, NotificationKind,
    ProtectionLevel, SettingsTab, TimeRange, VerificationReport,
};

#[derive(Debug, Default)]
pub(crate) struct HomeState {
    pub(crate) tab: HomeTab,
}

#[derive(Debug, Default)]
pub(crate) struct VerifyState {
    pub(crate) input: String,
    pub(crate) analyzing: bool,
    pub(crate) report: Option<VerificationReport>,
}

impl VerifyState {
    /// Whether the verify action may start.
    pub(crate) fn can_submit(&self) -> bool {
        !self.analyzing && !self.input.trim().is_empty()
    }
}

#[derive(Debug, Default)]
pub(crate) struct EducationState {
    pub(crate) category: CourseCategory,
}

#[derive(Debug, Default)]
pub(crate) struct CommunityState {
    pub(crate) tab: CommunityTab,
}

#[derive(Debug, Default)]
pub(crate) struct ProtectionState {
    pub(crate) level: ProtectionLevel,
    pub(crate) scanning: bool,
}

#[derive(Debug, Default)]
pub(crate) struct AnalyticsState {
    pub(crate) range: TimeRange,
    pub(crate) loading: bool,
}

#[derive(Debug, Default)]
pub(crate) struct AuthorityState {
    pub(crate) role: AuthorityRole,
}

/// Notification preferences, kept in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NotificationPrefs {
    email: bool,
    push: bool,
    security: bool,
    updates: bool,
}

impl NotificationPrefs {
    pub(crate) fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::Security => self.security,
            NotificationKind::Updates => self.updates,
        }
    }

    pub(crate) fn toggle(&mut self, kind: NotificationKind) {
        let slot = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::Security => &mut self.security,
            NotificationKind::Updates => &mut self.updates,
        };
        *slot = !*slot;
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            security: true,
            updates: false,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SettingsState {
    pub(crate) tab: SettingsTab,
    pub(crate) notifications: NotificationPrefs,
}

/// Section-local state for every panel.
#[derive(Debug, Default)]
pub(crate) struct SectionsState {
    pub(crate) home: HomeState,
    pub(crate) verify: VerifyState,
    pub(crate) education: EducationState,
    pub(crate) community: CommunityState,
    pub(crate) protection: ProtectionState,
    pub(crate) analytics: AnalyticsState,
    pub(crate) authority: AuthorityState,
    pub(crate) settings: SettingsState,
}

impl SectionsState {
    /// Return `section` to its initial presentation.
    pub(crate) fn reset(&mut self, section: SectionId) {
        match section {
            SectionId::Home => self.home = HomeState::default(),
            SectionId::Verify => self.verify = VerifyState::default(),
            SectionId::Education => {
                self.education = EducationState::default()
            },
            SectionId::Community => {
                self.community = CommunityState::default()
            },
            SectionId::Protection => {
                self.protection = ProtectionState::default()
            },
            SectionId::Analytics => {
                self.analytics = AnalyticsState::default()
            },
            SectionId::Authority => {
                self.authority = AuthorityState::default()
            },
            SectionId::Settings => self.settings = SettingsState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use vanta_nav::SectionId;

    use super::{NotificationPrefs, SectionsState};
    use crate::widgets::sections::model::{
        NotificationKind, ProtectionLevel, SettingsTab,
    };

    #[test]
    fn given_default_prefs_when_read_then_email_and_security_are_on() {
        let prefs = NotificationPrefs::default();

        assert!(prefs.is_enabled(NotificationKind::Email));
        assert!(!prefs.is_enabled(NotificationKind::Push));
        assert!(prefs.is_enabled(NotificationKind::Security));
        assert!(!prefs.is_enabled(NotificationKind::Updates));
    }

    #[test]
    fn given_pref_when_toggled_twice_then_returns_to_original() {
        let mut prefs = NotificationPrefs::default();

        prefs.toggle(NotificationKind::Push);
        assert!(prefs.is_enabled(NotificationKind::Push));
        prefs.toggle(NotificationKind::Push);

        assert_eq!(prefs, NotificationPrefs::default());
    }

    #[test]
    fn given_modified_sections_when_one_is_reset_then_others_keep_state() {
        let mut state = SectionsState::default();
        state.settings.tab = SettingsTab::Privacy;
        state.protection.level = ProtectionLevel::Low;

        state.reset(SectionId::Settings);

        assert_eq!(state.settings.tab, SettingsTab::Profile);
        assert_eq!(state.protection.level, ProtectionLevel::Low);
    }

    #[test]
    fn given_verify_input_when_blank_or_analyzing_then_cannot_submit() {
        let mut state = SectionsState::default();
        assert!(!state.verify.can_submit());

        state.verify.input = String::from("   ");
        assert!(!state.verify.can_submit());

        state.verify.input = String::from("The moon is made of cheese");
        assert!(state.verify.can_submit());

        state.verify.analyzing = true;
        assert!(!state.verify.can_submit());
    }
}
