mod api;
mod app;
mod error;
mod executor;
mod lookup;
mod messages;
mod render;

use iced::{Application, Settings};
use tracing_subscriber::EnvFilter;

use app::XrpTrackerApp;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut settings = Settings::default();
    settings.window.resizable = false;
    settings.window.size = (900, 640);
    XrpTrackerApp::run(settings)
}
