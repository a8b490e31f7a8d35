//! A small DOM-like tree.
//!
//! Views build a [`Node`] tree; the GUI paints it and tests query it. The
//! `Display` impl writes the tree out as HTML.

pub mod detail;
pub mod home;

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Nav,
    Section,
    Article,
    Div,
    H1,
    H2,
    H3,
    P,
    Ul,
    Li,
    Span,
    A,
    Button,
    Img,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Nav => "nav",
            Tag::Section => "section",
            Tag::Article => "article",
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Span => "span",
            Tag::A => "a",
            Tag::Button => "button",
            Tag::Img => "img",
        }
    }

    fn is_void(self) -> bool {
        matches!(self, Tag::Img)
    }
}

/// What activating an element does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Smooth-scroll to the section with this anchor id.
    ScrollTo(String),
    /// Open the detail view of the project with this id.
    SelectProject(String),
    Back,
    /// Open an external URL in a new browsing context.
    OpenUrl(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ScrollTo(anchor) => write!(f, "scroll:{anchor}"),
            Action::SelectProject(id) => write!(f, "select:{id}"),
            Action::Back => f.write_str("back"),
            Action::OpenUrl(url) => write!(f, "open:{url}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub action: Option<Action>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            action: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// This element and all element descendants, pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants().find(|e| e.id.as_deref() == Some(id))
    }

    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        self.descendants().filter(|e| e.tag == tag).collect()
    }

    pub fn find_first(&self, tag: Tag) -> Option<&Element> {
        self.descendants().find(|e| e.tag == tag)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants().filter(|e| e.has_class(class)).collect()
    }

    /// Elements whose own text equals `text`, e.g. a button label.
    pub fn find_by_text(&self, text: &str) -> Vec<&Element> {
        self.descendants()
            .filter(|e| e.text_content().trim() == text)
            .collect()
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        for child in next.children.iter().rev() {
            if let Node::Element(element) = child {
                self.stack.push(element);
            }
        }
        Some(next)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

fn escape(text: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

fn write_attr(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    write!(f, " {name}=\"")?;
    escape(value, f)?;
    f.write_str("\"")
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag.name())?;
        if let Some(id) = &self.id {
            write_attr(f, "id", id)?;
        }
        if !self.classes.is_empty() {
            write_attr(f, "class", &self.classes.join(" "))?;
        }
        for (name, value) in &self.attributes {
            write_attr(f, name, value)?;
        }
        if let Some(action) = &self.action {
            write_attr(f, "data-action", &action.to_string())?;
        }
        f.write_str(">")?;
        if self.tag.is_void() {
            return Ok(());
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag.name())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Text(text) => escape(text, f),
        }
    }
}

/// An outbound link, opened in a new browsing context unless it is a mail link.
pub(crate) fn external_link(url: &str, label: impl Into<Node>) -> Element {
    let link = Element::new(Tag::A)
        .attr("href", url)
        .on_click(Action::OpenUrl(url.to_string()))
        .child(label);
    if url.starts_with("mailto:") {
        link
    } else {
        link.attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }
}

/// Tag chips, in display order.
pub(crate) fn tag_list(tags: &[&str]) -> Element {
    Element::new(Tag::Div)
        .class("row")
        .class("tags")
        .children(tags.iter().map(|tag| Element::new(Tag::Span).class("tag").text(*tag)))
}
