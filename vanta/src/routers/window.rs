use iced::window;

use crate::app::App;

/// Feed window size changes to the layout controller.
pub(crate) fn route(app: &mut App, event: window::Event) {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            handle_resize(app, size);
        },
        _ => {},
    }
}

fn handle_resize(app: &mut App, size: iced::Size) {
    if let Some(class) = app.layout.on_width(size.width) {
        log::info!(
            "viewport is now {} ({:.0} px)",
            class.label(),
            size.width
        );
    }
}
