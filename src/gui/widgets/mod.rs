//! Paints a [`document`](crate::document) tree with iced widgets.

use std::collections::HashMap;

use iced::{
    Element, Length, Size, Theme, border,
    widget::{button, column, container, image, row, text},
};
use iced_widget::container::bordered_box;

use crate::document::{self, Action, Node, Tag};

pub const PAGE_PADDING: f32 = 24.0;
pub const SECTION_SPACING: f32 = 48.0;
const MAX_CONTENT_WIDTH: f32 = 960.0;

/// What a painted document can ask for.
#[derive(Debug, Clone)]
pub enum Event {
    Action(Action),
    SectionMeasured(String, Size),
}

pub struct RenderContext<'a> {
    pub images: &'a HashMap<&'static str, image::Handle>,
    /// Text opacity of the subtree being painted.
    pub opacity: f32,
}

impl<'a> RenderContext<'a> {
    pub fn with_opacity(&self, opacity: f32) -> Self {
        Self {
            images: self.images,
            opacity,
        }
    }
}

pub fn render<'a>(element: &'a document::Element, ctx: &RenderContext<'a>) -> Element<'a, Event> {
    match element.tag {
        Tag::H1 => label(element.text_content(), 36.0, ctx.opacity).into(),
        Tag::H2 => label(element.text_content(), 26.0, ctx.opacity).into(),
        Tag::H3 => label(element.text_content(), 20.0, ctx.opacity).into(),
        Tag::P | Tag::Li => label(element.text_content(), 16.0, ctx.opacity).into(),
        Tag::Span if element.has_class("tag") => chip(element.text_content(), ctx.opacity),
        Tag::Span => label(element.text_content(), 15.0, ctx.opacity).into(),
        Tag::Ul => column(element.children.iter().filter_map(Node::as_element).map(
            |li| -> Element<'a, Event> {
                row![label("•".to_string(), 16.0, ctx.opacity), render(li, ctx)]
                    .spacing(8)
                    .into()
            },
        ))
        .spacing(6)
        .into(),
        Tag::A | Tag::Button => clickable(element, ctx),
        Tag::Img => picture(element, ctx),
        Tag::Nav | Tag::Section | Tag::Article | Tag::Div => block(element, ctx),
    }
}

fn children<'a>(element: &'a document::Element, ctx: &RenderContext<'a>) -> Vec<Element<'a, Event>> {
    element
        .children
        .iter()
        .map(|node| match node {
            Node::Element(child) => render(child, ctx),
            Node::Text(content) => label(content.clone(), 16.0, ctx.opacity).into(),
        })
        .collect()
}

fn block<'a>(element: &'a document::Element, ctx: &RenderContext<'a>) -> Element<'a, Event> {
    let content: Element<'a, Event> = if element.has_class("row") {
        row(children(element, ctx)).spacing(12).wrap().into()
    } else {
        column(children(element, ctx)).spacing(16).into()
    };

    if element.has_class("card") {
        container(content)
            .padding(24)
            .width(Length::Fill)
            .style(bordered_box)
            .into()
    } else {
        container(content).max_width(MAX_CONTENT_WIDTH).into()
    }
}

fn clickable<'a>(element: &'a document::Element, ctx: &RenderContext<'a>) -> Element<'a, Event> {
    let content: Element<'a, Event> = if element.has_class("card") {
        container(column(children(element, ctx)).spacing(12))
            .padding(24)
            .width(Length::Fill)
            .style(bordered_box)
            .into()
    } else {
        label(element.text_content(), 16.0, ctx.opacity).into()
    };

    let style: fn(&Theme, button::Status) -> button::Style = if element.has_class("code") {
        button::primary
    } else if element.has_class("demo") {
        button::success
    } else {
        button::text
    };

    let widget = button(content).style(style);
    match &element.action {
        Some(action) => widget.on_press(Event::Action(action.clone())).into(),
        None => widget.into(),
    }
}

fn picture<'a>(element: &'a document::Element, ctx: &RenderContext<'a>) -> Element<'a, Event> {
    let handle = element
        .get_attr("src")
        .and_then(|src| ctx.images.get(src));
    match handle {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        // no cached image for this source: show the alt text instead
        None => label(
            element.get_attr("alt").unwrap_or_default().to_string(),
            14.0,
            ctx.opacity,
        )
        .into(),
    }
}

fn chip<'a>(content: String, opacity: f32) -> Element<'a, Event> {
    container(label(content, 14.0, opacity))
        .padding([2, 8])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().primary.weak.color.into()),
            border: border::rounded(6),
            ..container::Style::default()
        })
        .into()
}

fn label<'a>(content: String, size: f32, opacity: f32) -> text::Text<'a> {
    text(content).size(size).style(move |theme: &Theme| text::Style {
        color: Some(theme.palette().text.scale_alpha(opacity)),
    })
}
