use portfolio::{ContentStore, Profile, Project};

pub static SCENARIO_PROFILE: Profile = Profile {
    name: "Test Owner",
    headline: "Engineer",
    tagline: "Builds things",
    about: "About text",
    social: &[],
};

/// Two projects: "a" without a demo, "b" with one.
pub static SCENARIO_PROJECTS: [Project; 2] = [
    make_project("a", "T1", None),
    make_project("b", "T2", Some("https://x")),
];

pub const fn make_project(
    id: &'static str,
    title: &'static str,
    demo: Option<&'static str>,
) -> Project {
    Project {
        id,
        title,
        description: "A test project",
        tags: &["Rust", "Testing"],
        github: "https://github.com/example/test",
        demo,
        image: "/api/placeholder/800/400",
        technical_details: &["detail one", "detail two"],
        features: &["feature one"],
        challenges: &["challenge one"],
    }
}

pub fn scenario_store() -> ContentStore {
    ContentStore::new(&SCENARIO_PROFILE, &SCENARIO_PROJECTS)
}

/// Text of the first `h1` in a rendered page.
pub fn page_title(page: &portfolio::Node) -> Option<String> {
    page.as_element()?
        .find_first(portfolio::Tag::H1)
        .map(|h1| h1.text_content())
}

/// Whether a rendered page offers a "Live Demo" link.
pub fn has_live_demo(page: &portfolio::Node) -> bool {
    page.as_element()
        .map(|root| {
            root.find_all(portfolio::Tag::A)
                .iter()
                .any(|a| a.text_content() == portfolio::document::detail::LIVE_DEMO_LABEL)
        })
        .unwrap_or(false)
}
