use iced::{
    Element, Length, Task,
    widget::{column, container, scrollable},
};

use crate::{
    content::Project,
    document::{self, Action, Node},
    gui::{
        AppState, open_url, page_scroll_id,
        screens::{Screen, ScreenMessage},
        widgets::{Event, PAGE_PADDING, RenderContext, render},
    },
};

#[derive(Debug, Clone)]
pub struct ProjectScreen {
    project: &'static Project,
    document: Node,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Back,
}

impl ProjectScreen {
    pub fn new(project: &'static Project) -> Self {
        Self {
            project,
            document: document::detail::render(project),
        }
    }
}

impl Screen for ProjectScreen {
    type Message = Event;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(root) = self.document.as_element() else {
            return column![].into();
        };
        let ctx = RenderContext {
            images: &state.images,
            opacity: 1.0,
        };

        let page: Element<'a, Event> = scrollable(
            container(render(root, &ctx))
                .padding(PAGE_PADDING)
                .center_x(Length::Fill),
        )
        .id(page_scroll_id())
        .height(Length::Fill)
        .into();
        page.map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            Event::Action(Action::Back) => {
                tracing::debug!(project = self.project.id, "leaving detail view");
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Back))
            }
            Event::Action(Action::OpenUrl(url)) => {
                open_url(&url);
                Task::none()
            }
            // the detail view has no sections to measure and no in-page anchors
            Event::Action(Action::ScrollTo(_) | Action::SelectProject(_))
            | Event::SectionMeasured(..) => Task::none(),
        }
    }
}
