use iced::{
    Element, Length, Task,
    widget::{column, container, scrollable, sensor},
};

use crate::{
    config::NAV_HEIGHT,
    content::ContentStore,
    document::{self, Action, Node, Tag},
    gui::{
        AppState, open_url, page_scroll_id,
        screens::{Screen, ScreenMessage},
        widgets::{Event, PAGE_PADDING, RenderContext, SECTION_SPACING, render},
    },
    navigation::scroll::Viewport,
};

#[derive(Debug, Clone)]
pub struct HomeScreen {
    document: Node,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    Document(Event),
    Scrolled(Viewport),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenProject(String),
}

impl HomeScreen {
    pub fn new(content: &ContentStore) -> Self {
        Self {
            document: document::home::render(content),
        }
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(root) = self.document.as_element() else {
            return column![].into();
        };
        let ctx = RenderContext {
            images: &state.images,
            opacity: 1.0,
        };

        let nav: Element<'a, Event> = match root.find_first(Tag::Nav) {
            Some(nav) => render(nav, &ctx),
            None => column![].into(),
        };

        let sections = root
            .find_all(Tag::Section)
            .into_iter()
            .map(|section| -> Element<'a, HomeMessage> {
                let anchor = section.id.clone().unwrap_or_default();
                let opacity = state.reveal.opacity(&anchor, state.now);
                // every section reports its size, visible or not
                let measured = sensor(render(section, &ctx.with_opacity(opacity)))
                    .on_resize(move |size| Event::SectionMeasured(anchor.clone(), size));
                Element::from(measured).map(HomeMessage::Document)
            });

        let page = scrollable(
            container(column(sections).spacing(SECTION_SPACING))
                .padding(PAGE_PADDING)
                .center_x(Length::Fill),
        )
        .id(page_scroll_id())
        .on_scroll(|viewport| {
            HomeMessage::Scrolled(Viewport {
                offset: viewport.absolute_offset().y,
                height: viewport.bounds().height,
            })
        })
        .height(Length::Fill);

        let content: Element<'a, HomeMessage> = column![
            container(nav.map(HomeMessage::Document))
                .padding([12, 24])
                .width(Length::Fill)
                .center_y(NAV_HEIGHT),
            page,
        ]
        .into();
        content.map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::Scrolled(viewport) => {
                state.viewport = viewport;
                if !state.scroll.is_animating() {
                    state.scroll.set_position(viewport.offset);
                }
                state.observe_sections();
                Task::none()
            }
            HomeMessage::Document(Event::SectionMeasured(anchor, size)) => {
                if state.layout.measure(&anchor, size.height) {
                    tracing::debug!(anchor, height = size.height, "section measured");
                    state.observe_sections();
                }
                Task::none()
            }
            HomeMessage::Document(Event::Action(action)) => match action {
                Action::ScrollTo(anchor) => {
                    state.scroll.scroll_to(
                        &state.layout,
                        state.viewport,
                        &anchor,
                        std::time::Instant::now(),
                    );
                    Task::none()
                }
                Action::SelectProject(id) => {
                    Task::done(ScreenMessage::ParentMessage(ParentMessage::OpenProject(id)))
                }
                Action::OpenUrl(url) => {
                    open_url(&url);
                    Task::none()
                }
                Action::Back => Task::none(),
            },
        }
    }
}
