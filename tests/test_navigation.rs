//! Integration tests for the page navigation state machine.
//!
//! Tests cover:
//! - Selecting any project from home opens its detail view
//! - Back always returns to (home, none)
//! - The two-project scenario: demo link only where a demo exists

mod common;

use common::*;

#[test]
fn test_selecting_each_project_shows_its_title() -> anyhow::Result<()> {
    let store = ContentStore::builtin();

    for project in store.projects() {
        let mut state = ViewState::new();
        assert_eq!(state.select(project), Effect::ScrollToTop);

        assert_eq!(state.current_page(), Page::Project);
        assert!(std::ptr::eq(
            state.selected_project().expect("selection"),
            project
        ));

        let page = state.resolve().render(&store);
        assert_eq!(page_title(&page).as_deref(), Some(project.title));
    }

    Ok(())
}

#[test]
fn test_back_clears_selection() {
    let store = ContentStore::builtin();
    let mut state = ViewState::new();
    state.select_by_id(&store, "rag-system").expect("known id");

    state.back();

    assert_eq!(state.current_page(), Page::Home);
    assert_eq!(state.selected_project(), None);
    assert_eq!(state.resolve(), ResolvedView::Home);
}

#[test]
fn test_scenario_demo_links() -> anyhow::Result<()> {
    let store = scenario_store();
    store.validate()?;
    let mut state = ViewState::new();

    // 1. Select "a": title T1, no demo link
    state
        .select_by_id(&store, "a")
        .ok_or_else(|| anyhow::anyhow!("project a missing"))?;
    let page = state.resolve().render(&store);
    assert_eq!(page_title(&page).as_deref(), Some("T1"));
    assert!(!has_live_demo(&page), "project a has no demo");

    // 2. Back: home view
    state.back();
    assert_eq!(state.resolve(), ResolvedView::Home);
    let home = state.resolve().render(&store);
    assert!(
        home.as_element()
            .and_then(|root| root.find_by_id("projects"))
            .is_some(),
        "home view should list the projects"
    );

    // 3. Select "b": title T2, demo link present
    state
        .select_by_id(&store, "b")
        .ok_or_else(|| anyhow::anyhow!("project b missing"))?;
    let page = state.resolve().render(&store);
    assert_eq!(page_title(&page).as_deref(), Some("T2"));
    assert!(has_live_demo(&page), "project b has a demo");

    Ok(())
}

#[test]
fn test_card_actions_resolve_through_the_store() {
    let store = scenario_store();
    let home = ResolvedView::Home.render(&store);
    let root = home.as_element().expect("root element");

    let mut state = ViewState::new();
    for card in root.find_by_class("project-card") {
        let Some(Action::SelectProject(id)) = &card.action else {
            panic!("project card without a select action");
        };
        state.select_by_id(&store, id).expect("card id is in the store");
        assert_eq!(
            state.selected_project().map(|p| p.id),
            Some(id.as_str())
        );
        state.back();
    }
}

#[test]
fn test_invalid_project_state_redirects_home() {
    let state = ViewState::from_parts(Page::Project, None);
    let page = state.resolve().render(&scenario_store());
    let root = page.as_element().expect("root element");
    assert_eq!(root.id.as_deref(), Some("home"));
}
