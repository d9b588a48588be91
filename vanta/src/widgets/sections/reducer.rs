use iced::Task;
use vanta_nav::{RouteController, SectionTicket};

use super::event::{SectionsEffect, SectionsEvent, SectionsIntent};
use super::services;
use super::state::SectionsState;
use crate::widgets::toasts::ToastRequest;

/// Read-only context for sections reduction.
pub(crate) struct SectionsCtx<'a> {
    pub(crate) route: &'a RouteController,
}

/// Simulated background work started by an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Job {
    Verify(SectionTicket),
    Scan(SectionTicket),
    Refresh(SectionTicket),
}

#[derive(Debug, Default)]
struct Outcome {
    effects: Vec<SectionsEffect>,
    job: Option<Job>,
}

impl Outcome {
    fn effect(effect: SectionsEffect) -> Self {
        Self {
            effects: vec![effect],
            job: None,
        }
    }

    fn notify(request: ToastRequest) -> Self {
        Self::effect(SectionsEffect::Notify(request))
    }

    fn job(job: Job) -> Self {
        Self {
            effects: Vec::new(),
            job: Some(job),
        }
    }
}

/// Reduce a sections intent into state updates, effects and background
/// tasks.
pub(crate) fn reduce(
    state: &mut SectionsState,
    event: SectionsIntent,
    ctx: &SectionsCtx<'_>,
) -> Task<SectionsEvent> {
    let outcome = apply(state, event, ctx);

    let mut tasks: Vec<Task<SectionsEvent>> = outcome
        .effects
        .into_iter()
        .map(|effect| Task::done(SectionsEvent::Effect(effect)))
        .collect();
    if let Some(job) = outcome.job {
        tasks.push(spawn(job));
    }

    Task::batch(tasks)
}

fn spawn(job: Job) -> Task<SectionsEvent> {
    match job {
        Job::Verify(ticket) => {
            Task::perform(services::run_verification(), move |report| {
                SectionsEvent::Intent(SectionsIntent::VerificationFinished {
                    ticket,
                    report,
                })
            })
        },
        Job::Scan(ticket) => Task::perform(services::run_scan(), move |_| {
            SectionsEvent::Intent(SectionsIntent::ScanFinished { ticket })
        }),
        Job::Refresh(ticket) => {
            Task::perform(services::run_refresh(), move |_| {
                SectionsEvent::Intent(SectionsIntent::RefreshFinished {
                    ticket,
                })
            })
        },
    }
}

fn apply(
    state: &mut SectionsState,
    event: SectionsIntent,
    ctx: &SectionsCtx<'_>,
) -> Outcome {
    use SectionsIntent as I;

    match event {
        I::HomeTabSelected(tab) => {
            state.home.tab = tab;
            Outcome::default()
        },
        I::OpenSection(section) => {
            Outcome::effect(SectionsEffect::RequestSection(section))
        },
        I::VerifyInputChanged(input) => {
            state.verify.input = input;
            Outcome::default()
        },
        I::VerifySubmitted => {
            if !state.verify.can_submit() {
                return Outcome::default();
            }
            state.verify.analyzing = true;
            state.verify.report = None;
            Outcome::job(Job::Verify(ctx.route.ticket()))
        },
        I::VerificationFinished { ticket, report } => {
            if !is_fresh(ctx, &ticket, "verification") {
                return Outcome::default();
            }
            state.verify.analyzing = false;
            state.verify.report = Some(report);
            let verdict = services::verdict(report.score);
            Outcome::notify(ToastRequest::success(format!(
                "Verification complete: {}",
                verdict.label()
            )))
        },
        I::CategorySelected(category) => {
            state.education.category = category;
            Outcome::default()
        },
        I::CommunityTabSelected(tab) => {
            state.community.tab = tab;
            Outcome::default()
        },
        I::ProtectionLevelSelected(level) => {
            state.protection.level = level;
            Outcome::default()
        },
        I::ScanRequested => {
            if state.protection.scanning {
                return Outcome::default();
            }
            state.protection.scanning = true;
            Outcome::job(Job::Scan(ctx.route.ticket()))
        },
        I::ScanFinished { ticket } => {
            if !is_fresh(ctx, &ticket, "scan") {
                return Outcome::default();
            }
            state.protection.scanning = false;
            Outcome::notify(ToastRequest::success(
                "Security scan completed. No new threats found.",
            ))
        },
        I::TimeRangeSelected(range) => {
            state.analytics.range = range;
            Outcome::default()
        },
        I::RefreshRequested => {
            if state.analytics.loading {
                return Outcome::default();
            }
            state.analytics.loading = true;
            Outcome::job(Job::Refresh(ctx.route.ticket()))
        },
        I::RefreshFinished { ticket } => {
            if !is_fresh(ctx, &ticket, "analytics refresh") {
                return Outcome::default();
            }
            state.analytics.loading = false;
            Outcome::notify(ToastRequest::success("Analytics data refreshed"))
        },
        I::ExportRequested => Outcome::notify(ToastRequest::info(format!(
            "Export of the {} report requested",
            state.analytics.range.label()
        ))),
        I::RoleSelected(role) => {
            state.authority.role = role;
            Outcome::default()
        },
        I::SettingsTabSelected(tab) => {
            state.settings.tab = tab;
            Outcome::default()
        },
        I::NotificationToggled(kind) => {
            state.settings.notifications.toggle(kind);
            Outcome::default()
        },
        I::ThemeModeSelected(mode) => {
            Outcome::effect(SectionsEffect::SetThemeMode(mode))
        },
        I::SettingsSaved => {
            Outcome::notify(ToastRequest::success("Settings saved"))
        },
    }
}

fn is_fresh(ctx: &SectionsCtx<'_>, ticket: &SectionTicket, what: &str) -> bool {
    let fresh = ctx.route.is_current(ticket);
    if !fresh {
        log::debug!(
            "discarding stale {what} result for `{}`",
            ticket.section()
        );
    }
    fresh
}
