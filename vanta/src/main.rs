mod app;
mod components;
mod config;
mod guards;
mod icons;
mod routers;
mod theme;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, StartupOptions};
use crate::config::{ConfigLoadStatus, load_config};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = match load_config() {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match &status {
                ConfigLoadStatus::Loaded => log::info!("configuration loaded"),
                ConfigLoadStatus::Missing => {
                    log::debug!("no configuration file, using defaults")
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("configuration invalid: {message}")
                },
            }
            config
        },
        Err(err) => {
            log::warn!("configuration read failed: {err}");
            config::AppConfig::default()
        },
    };

    let options =
        StartupOptions::resolve(std::env::args().nth(1), &config);
    let window_size = Size::new(config.window_width(), config.window_height());

    iced::application(move || App::new(options.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: window_size,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            icon: icons::app_icon(),
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
