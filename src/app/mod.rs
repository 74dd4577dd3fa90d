mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use al_bayan_core::api::ContentSource;
use al_bayan_core::config::AppConfig;
use iced::{Size, window};
use std::sync::Arc;

/// Launches the reader window.
pub fn run_app(config: AppConfig, source: Arc<dyn ContentSource>) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(config, source))
}
