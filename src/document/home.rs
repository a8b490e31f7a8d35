use crate::content::{ContentStore, Project};

use super::{Action, Element, Node, Tag, external_link, tag_list};

pub const ABOUT_ANCHOR: &str = "about";
pub const PROJECTS_ANCHOR: &str = "projects";

/// Sections that fade in once they scroll into view.
pub const OBSERVED_SECTIONS: [&str; 2] = [ABOUT_ANCHOR, PROJECTS_ANCHOR];

/// Home page: nav bar, hero/about section and the project cards.
pub fn render(store: &ContentStore) -> Node {
    Element::new(Tag::Div)
        .id("home")
        .child(nav(store))
        .child(about_section(store))
        .child(projects_section(store))
        .into()
}

fn nav(store: &ContentStore) -> Element {
    Element::new(Tag::Nav).class("row").children([
        Element::new(Tag::H1)
            .class("brand")
            .text(store.profile().name),
        Element::new(Tag::Div).class("row").children([
            scroll_button("About", ABOUT_ANCHOR),
            scroll_button("Projects", PROJECTS_ANCHOR),
        ]),
    ])
}

fn scroll_button(label: &str, anchor: &str) -> Element {
    Element::new(Tag::Button)
        .class("nav-link")
        .on_click(Action::ScrollTo(anchor.to_string()))
        .text(label)
}

fn about_section(store: &ContentStore) -> Element {
    let profile = store.profile();
    let social = profile.social.iter().map(|link| {
        let anchor = external_link(link.url, link.kind.label()).class("social");
        match link.title {
            Some(title) => anchor.attr("title", title),
            None => anchor,
        }
    });

    Element::new(Tag::Section)
        .id(ABOUT_ANCHOR)
        .child(
            Element::new(Tag::Div)
                .class("hero")
                .child(Element::new(Tag::H1).text(profile.headline))
                .child(Element::new(Tag::P).class("tagline").text(profile.tagline))
                .child(Element::new(Tag::Div).class("row").children(social)),
        )
        .child(
            Element::new(Tag::Div)
                .class("card")
                .child(Element::new(Tag::H2).text("About Me"))
                .child(Element::new(Tag::P).text(profile.about)),
        )
        .child(
            Element::new(Tag::Button)
                .class("chevron")
                .on_click(Action::ScrollTo(PROJECTS_ANCHOR.to_string()))
                .text("↓"),
        )
}

fn projects_section(store: &ContentStore) -> Element {
    Element::new(Tag::Section)
        .id(PROJECTS_ANCHOR)
        .child(Element::new(Tag::H2).text("Featured Projects"))
        .child(
            Element::new(Tag::Div)
                .class("grid")
                .children(store.projects().iter().map(project_card)),
        )
}

fn project_card(project: &Project) -> Element {
    Element::new(Tag::Button)
        .class("card")
        .class("project-card")
        .attr("data-project", project.id)
        .on_click(Action::SelectProject(project.id.to_string()))
        .child(Element::new(Tag::H3).text(project.title))
        .child(Element::new(Tag::P).class("clamp").text(project.description))
        .child(tag_list(project.tags))
        .child(Element::new(Tag::Span).class("more").text("Learn more →"))
}
