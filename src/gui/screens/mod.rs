pub mod home_page;
pub mod project_page;

use std::convert::Infallible;

use iced::{Element, Task};

use crate::{
    gui::{AppState, Message, scroll_page_to, snap_page_to_top},
    navigation::{Effect, ResolvedView},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    HomePage(home_page::HomeScreen),
    ProjectPage(project_page::ProjectScreen),
}

impl ScreenData {
    /// The screen for whatever the navigation state resolves to.
    pub fn for_state(state: &AppState) -> Self {
        match state.navigation.resolve() {
            ResolvedView::Home => ScreenData::HomePage(home_page::HomeScreen::new(&state.content)),
            ResolvedView::Project(project) => {
                ScreenData::ProjectPage(project_page::ProjectScreen::new(project))
            }
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::HomePage(screen) => screen.view(state).map(Message::HomePage),
            ScreenData::ProjectPage(screen) => screen.view(state).map(Message::ProjectPage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let mut transition = None;
        let task = match (&mut *self, message) {
            (_, Message::WindowResized(size)) => {
                state.resize(size.height);
                Task::none()
            }
            (_, Message::Tick(now)) => {
                state.now = now;
                match state.scroll.tick(now) {
                    Some(offset) => scroll_page_to(offset),
                    None => Task::none(),
                }
            }
            (ScreenData::HomePage(page), Message::HomePage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::HomePage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(home_page::ParentMessage::OpenProject(id)) => {
                    transition = state.navigation.select_by_id(&state.content, &id);
                    Task::none()
                }
            },
            (ScreenData::ProjectPage(page), Message::ProjectPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ProjectPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(project_page::ParentMessage::Back) => {
                    transition = Some(state.navigation.back());
                    Task::none()
                }
            },
            // a message for a screen that is no longer shown
            _ => Task::none(),
        };

        let Some(effect) = transition else {
            return task;
        };
        *self = ScreenData::for_state(state);
        // the new page's scrollable starts at the top
        state.scroll.reset();
        state.viewport.offset = 0.0;
        match effect {
            Effect::ScrollToTop => Task::batch([task, snap_page_to_top()]),
            Effect::None => task,
        }
    }
}
