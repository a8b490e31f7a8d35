use std::collections::HashMap;
use std::time::Instant;

use iced::widget::image;

use crate::config::{Config, NAV_HEIGHT};
use crate::content::ContentStore;
use crate::document::home::{self, OBSERVED_SECTIONS};
use crate::gui::widgets::{PAGE_PADDING, SECTION_SPACING};
use crate::navigation::ViewState;
use crate::navigation::reveal::RevealTracker;
use crate::navigation::scroll::{ScrollController, SectionLayout, Viewport};
use crate::placeholder;

/// Everything the screens share. Navigation lives here, not in the screens.
#[derive(Debug)]
pub struct AppState {
    pub content: ContentStore,
    pub navigation: ViewState,
    pub layout: SectionLayout,
    pub viewport: Viewport,
    pub scroll: ScrollController,
    pub reveal: RevealTracker,
    pub images: HashMap<&'static str, image::Handle>,
    /// Time of the last frame, used for fades.
    pub now: Instant,
}

impl AppState {
    pub fn new(config: &Config, content: ContentStore) -> Self {
        let layout = SectionLayout::from_document(&home::render(&content))
            .with_spacing(PAGE_PADDING, SECTION_SPACING);

        let mut images = HashMap::new();
        for project in content.projects() {
            images.entry(project.image).or_insert_with(|| {
                let img = placeholder::render(project.image);
                let (width, height) = img.dimensions();
                image::Handle::from_rgba(width, height, img.into_raw())
            });
        }

        Self {
            content,
            navigation: ViewState::new(),
            layout,
            viewport: Viewport {
                offset: 0.0,
                height: config.initial_viewport_height(),
            },
            scroll: ScrollController::default(),
            reveal: RevealTracker::new(OBSERVED_SECTIONS),
            images,
            now: Instant::now(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating() || self.reveal.is_animating(self.now)
    }

    /// Re-check section visibility after the viewport or layout changed.
    pub fn observe_sections(&mut self) {
        self.now = Instant::now();
        let revealed = self.reveal.observe_layout(&self.layout, self.viewport, self.now);
        if revealed > 0 {
            tracing::debug!(revealed, "sections faded in");
        }
    }

    pub fn resize(&mut self, window_height: f32) {
        self.viewport.height = (window_height - NAV_HEIGHT).max(0.0);
        self.observe_sections();
    }
}
