use std::convert::Infallible;

use iced::{Element, Subscription, Task, Theme, window};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
};
use crate::{
    config::{Config, ThemeChoice},
    content::ContentStore,
    navigation::ResolvedView,
};

pub struct PortfolioApp {
    config: Config,
    state: AppState,
    screen: ScreenData,
}

impl PortfolioApp {
    pub fn new(config: Config, content: ContentStore) -> (Self, Task<Message>) {
        let state = AppState::new(&config, content);
        let screen = ScreenData::for_state(&state);
        (
            Self {
                config,
                state,
                screen,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let owner = self.state.content.profile().name;
        match self.state.navigation.resolve() {
            ResolvedView::Home => format!("{owner} · Portfolio"),
            ResolvedView::Project(project) => format!("{} · {owner}", project.title),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => absurd(never),
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen
            .view(&self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => absurd(never),
            })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let resized = window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        if self.state.is_animating() {
            Subscription::batch([resized, window::frames().map(Message::Tick)])
        } else {
            resized
        }
    }

    pub fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn absurd(never: Infallible) -> Message {
    match never {}
}
