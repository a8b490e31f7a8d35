mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::{
    Action, ContentStore, Effect, Node, Page, Project, ResolvedView, Tag, ViewState,
};
