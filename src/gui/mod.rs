mod app;
mod message;
mod screens;
mod state;
mod widgets;

use iced::{
    Task,
    widget::{
        self, operation,
        scrollable::{AbsoluteOffset, RelativeOffset},
    },
};

pub use app::PortfolioApp;
pub use message::Message;
pub use state::AppState;

use crate::{config::Config, content::ContentStore};

const PAGE_SCROLL_ID: &str = "page";

/// Open the portfolio window and block until it is closed.
pub fn run(config: Config, content: ContentStore) -> iced::Result {
    let size = iced::Size::new(config.window_width, config.window_height);
    tracing::info!(
        width = size.width,
        height = size.height,
        theme = ?config.theme,
        "opening portfolio window"
    );
    iced::application(
        move || PortfolioApp::new(config.clone(), content),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .theme(PortfolioApp::theme)
    .subscription(PortfolioApp::subscription)
    .window_size(size)
    .run()
}

pub(crate) fn page_scroll_id() -> widget::Id {
    widget::Id::new(PAGE_SCROLL_ID)
}

pub(crate) fn scroll_page_to<T>(offset: f32) -> Task<T> {
    operation::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y: offset })
}

pub(crate) fn snap_page_to_top<T>() -> Task<T> {
    operation::snap_to(page_scroll_id(), RelativeOffset::START)
}

/// Hand an outbound link to the system browser or mail client.
pub(crate) fn open_url(url: &str) {
    match webbrowser::open(url) {
        Ok(()) => tracing::info!(url, "opened link"),
        Err(e) => tracing::warn!(url, error = %e, "failed to open link"),
    }
}
