use crate::content::Project;

use super::{Action, Element, Node, Tag, external_link, tag_list};

pub const LIVE_DEMO_LABEL: &str = "Live Demo";
pub const VIEW_CODE_LABEL: &str = "View Code";

/// Detail page for one project.
pub fn render(project: &Project) -> Node {
    let mut links = Element::new(Tag::Div)
        .class("row")
        .class("links")
        .child(external_link(project.github, VIEW_CODE_LABEL).class("code"));
    if let Some(demo) = project.demo {
        links = links.child(external_link(demo, LIVE_DEMO_LABEL).class("demo"));
    }

    let article = Element::new(Tag::Article)
        .class("card")
        .child(Element::new(Tag::H1).text(project.title))
        .child(tag_list(project.tags))
        .child(
            Element::new(Tag::Img)
                .attr("src", project.image)
                .attr("alt", project.title),
        )
        .child(Element::new(Tag::H2).text("Overview"))
        .child(Element::new(Tag::P).text(project.description))
        .children(list_section("Technical Details", project.technical_details))
        .children(list_section("Key Features", project.features))
        .children(list_section("Challenges & Solutions", project.challenges))
        .child(links);

    Element::new(Tag::Div)
        .id("project")
        .attr("data-project", project.id)
        .child(
            Element::new(Tag::Button)
                .class("back")
                .on_click(Action::Back)
                .text("← Back to Home"),
        )
        .child(article)
        .into()
}

fn list_section(heading: &str, items: &[&str]) -> [Element; 2] {
    [
        Element::new(Tag::H2).text(heading),
        Element::new(Tag::Ul).children(items.iter().map(|item| Element::new(Tag::Li).text(*item))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn lists_keep_record_order() {
        let project = &PROJECTS[0];
        let page = render(project);
        let root = page.as_element().expect("root element");
        let lists = root.find_all(Tag::Ul);
        assert_eq!(lists.len(), 3);
        let features: Vec<String> = lists[1]
            .find_all(Tag::Li)
            .iter()
            .map(|li| li.text_content())
            .collect();
        assert_eq!(features, project.features);
    }

    #[test]
    fn image_uses_project_asset() {
        let project = &PROJECTS[1];
        let page = render(project);
        let root = page.as_element().expect("root element");
        let img = root.find_first(Tag::Img).expect("img");
        assert_eq!(img.get_attr("src"), Some(project.image));
        assert_eq!(img.get_attr("alt"), Some(project.title));
    }
}
