pub mod config;
pub mod content;
pub mod document;
pub mod navigation;
pub mod placeholder;

pub use config::{Config, ThemeChoice};
pub use content::{ContentError, ContentStore, Profile, Project, SocialKind, SocialLink};
pub use document::{Action, Element, Node, Tag};
pub use navigation::{Effect, Page, ResolvedView, ViewState};

#[cfg(feature = "gui")]
pub mod gui;
