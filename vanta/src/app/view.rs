use iced::widget::{Stack, column, container, row, scrollable};
use iced::{Background, Element, Length, Theme};

use super::{App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::header::view::{self as header_view, HeaderProps};
use crate::widgets::header::{HeaderEvent, HeaderViewModel};
use crate::widgets::sections::SectionsEvent;
use crate::widgets::sections::view::SectionProps;
use crate::widgets::sidebar::view::{
    SidebarProps, desktop as sidebar_desktop, mobile as sidebar_mobile,
};
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::toasts::ToastsEvent;
use crate::widgets::toasts::model::ToastPlacement;
use crate::widgets::toasts::view::{self as toasts_view, ToastsProps};

const CONTENT_PADDING: f32 = 24.0;
const MOBILE_CONTENT_PADDING: f32 = 16.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = *theme_props.palette();

    let header = view_header(app, theme_props);
    let body = view_body(app, theme_props);

    let base = container(column![header, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.background)),
            ..Default::default()
        });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![base.into()];

    // Mobile navigation overlay
    if app.layout.sidebar_visible() {
        let current = app.route.current_section();
        layers.push(
            sidebar_mobile::view(SidebarProps {
                vm: app.widgets.sidebar.vm(current),
                theme: theme_props,
            })
            .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event))),
        );
    }

    // Toast layer
    if !app.widgets.toasts.is_empty() {
        layers.push(
            toasts_view::view(ToastsProps {
                state: app.widgets.toasts.state(),
                placement: ToastPlacement::for_viewport(
                    app.layout.viewport_class(),
                ),
                theme: theme_props,
            })
            .map(|event| AppEvent::Toasts(ToastsEvent::Intent(event))),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let vm = HeaderViewModel {
        compact: app.layout.uses_overlay_navigation(),
        menu_open: app.layout.is_sidebar_open(),
        current: app.route.current_section(),
    };

    header_view::view(HeaderProps {
        vm,
        theme: theme_props,
    })
    .map(|event| AppEvent::Header(HeaderEvent::Intent(event)))
}

/// Inline sidebar (tablet and desktop) next to the scrollable content pane.
fn view_body<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let section = app.route.current_section();
    let viewport = app.layout.viewport_class();

    let render = app.registry.resolve(section);
    let panel = render(SectionProps {
        state: app.widgets.sections.state(),
        theme: theme_props,
        viewport,
    })
    .map(|event| AppEvent::Sections(SectionsEvent::Intent(event)));

    let padding = if viewport.is_mobile() {
        MOBILE_CONTENT_PADDING
    } else {
        CONTENT_PADDING
    };

    let content = scrollable(
        container(panel)
            .width(Length::Fill)
            .padding(padding)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    match app.layout.sidebar_width() {
        Some(width) => {
            let sidebar = sidebar_desktop::view(
                SidebarProps {
                    vm: app.widgets.sidebar.vm(section),
                    theme: theme_props,
                },
                width,
            )
            .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event)));

            row![sidebar, content]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        },
        None => content.into(),
    }
}
