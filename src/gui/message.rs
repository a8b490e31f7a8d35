use std::time::Instant;

use iced::Size;

use crate::gui::screens::{ScreenMessage, home_page::HomeScreen, project_page::ProjectScreen};

#[derive(Debug, Clone)]
pub enum Message {
    HomePage(ScreenMessage<HomeScreen>),
    ProjectPage(ScreenMessage<ProjectScreen>),
    WindowResized(Size),
    Tick(Instant),
}
