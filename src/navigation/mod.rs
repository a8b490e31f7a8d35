//! # Page Navigation State Machine
//!
//! ```text
//! Home ──select(p)──▶ Project(p)
//!   ▲                     │
//!   └────────back()───────┘
//! ```
//!
//! The state is two fields, the current page and the selected project,
//! kept consistent by the transitions: a `Project` page always has a
//! selection and returning home always clears it.

pub mod reveal;
pub mod scroll;

use std::fmt;

use crate::content::{ContentStore, Project};
use crate::document::{self, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Project,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => f.write_str("home"),
            Page::Project => f.write_str("project"),
        }
    }
}

/// Side effect a transition asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ScrollToTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    current_page: Page,
    selected_project: Option<&'static Project>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current_page: Page::Home,
            selected_project: None,
        }
    }

    /// Restore an arbitrary pair. An inconsistent pair is tolerated here and
    /// redirected to home by [`ViewState::resolve`].
    pub fn from_parts(current_page: Page, selected_project: Option<&'static Project>) -> Self {
        Self {
            current_page,
            selected_project,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected_project
    }

    /// Show the detail view of `project`.
    pub fn select(&mut self, project: &'static Project) -> Effect {
        tracing::info!(from = %self.current_page, project = project.id, "opening project");
        self.selected_project = Some(project);
        self.current_page = Page::Project;
        Effect::ScrollToTop
    }

    /// Look `id` up in `store` and select it. Unknown ids leave the state untouched.
    pub fn select_by_id(&mut self, store: &ContentStore, id: &str) -> Option<Effect> {
        match store.get(id) {
            Some(project) => Some(self.select(project)),
            None => {
                tracing::warn!(project = id, "ignoring selection of unknown project");
                None
            }
        }
    }

    /// Return to the home page and clear the selection.
    pub fn back(&mut self) -> Effect {
        tracing::info!(from = %self.current_page, "back to home");
        self.current_page = Page::Home;
        self.selected_project = None;
        Effect::None
    }

    pub fn resolve(&self) -> ResolvedView {
        match (self.current_page, self.selected_project) {
            (Page::Home, _) => ResolvedView::Home,
            (Page::Project, Some(project)) => ResolvedView::Project(project),
            (Page::Project, None) => {
                tracing::warn!("project page without a selection, showing home instead");
                ResolvedView::Home
            }
        }
    }
}

/// The view the controller will actually render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedView {
    Home,
    Project(&'static Project),
}

impl ResolvedView {
    pub fn render(&self, store: &ContentStore) -> Node {
        match self {
            ResolvedView::Home => document::home::render(store),
            ResolvedView::Project(project) => document::detail::render(project),
        }
    }
}
