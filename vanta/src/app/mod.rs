mod subscription;
mod update;
mod view;

use std::time::Duration;

use iced::{Element, Subscription, Task, Theme};
use vanta_nav::{
    LayoutController, Location, RouteController, SectionId, SectionRegistry,
};

use crate::config::AppConfig;
use crate::theme::{ThemeManager, ThemeMode};
use crate::widgets::header::{HeaderEvent, HeaderWidget};
use crate::widgets::sections::view::SectionView;
use crate::widgets::sections::{self, SectionsEvent, SectionsWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::toasts::{ToastsEvent, ToastsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

const TITLE_PREFIX: &str = "VANTA AI";

/// Startup inputs resolved from the command line and configuration.
#[derive(Debug, Clone)]
pub(crate) struct StartupOptions {
    fragment: String,
    window_width: f32,
    toast_duration: Duration,
}

impl StartupOptions {
    /// Pick the startup fragment: the first command-line argument, else the
    /// configured start section, else empty (home).
    pub(crate) fn resolve(arg: Option<String>, config: &AppConfig) -> Self {
        let fragment = arg
            .or_else(|| config.start_section().map(str::to_string))
            .unwrap_or_default();

        Self {
            fragment,
            window_width: config.window_width(),
            toast_duration: config.toast_duration(),
        }
    }
}

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Header widget
    Header(HeaderEvent),
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Sections widget
    Sections(SectionsEvent),
    // Toasts widget
    Toasts(ToastsEvent),
    // Navigation
    RequestSection(SectionId),
    FragmentChanged(String),
    HistoryBack,
    HistoryForward,
    // Layout
    ToggleSidebar,
    CloseSidebar,
    SetThemeMode(ThemeMode),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) header: HeaderWidget,
    pub(crate) sidebar: SidebarWidget,
    pub(crate) sections: SectionsWidget,
    pub(crate) toasts: ToastsWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) location: Location,
    pub(crate) route: RouteController,
    pub(crate) layout: LayoutController,
    pub(crate) registry: SectionRegistry<SectionView>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(options: StartupOptions) -> (Self, Task<AppEvent>) {
        let location = Location::new(&options.fragment);
        let route = RouteController::from_fragment(location.fragment());
        let layout = LayoutController::from_width(options.window_width);

        let mut widgets = Widgets {
            header: HeaderWidget::new(),
            sidebar: SidebarWidget::new(),
            sections: SectionsWidget::new(),
            toasts: ToastsWidget::new(options.toast_duration),
        };
        widgets.sections.enter(route.current_section());

        log::info!(
            "starting at `{}` ({} viewport)",
            route.current_section(),
            layout.viewport_class().label()
        );

        let app = App {
            theme_manager: ThemeManager::new(),
            location,
            route,
            layout,
            registry: sections::view::registry(),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title for the current section.
    pub(crate) fn title(&self) -> String {
        format!("{TITLE_PREFIX} - {}", self.route.current_section().title())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
