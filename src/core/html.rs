// src/core/html.rs
//! DOM accessor.
//!
//! Thin, read-only view over a parsed `scraper::Html` tree. Adapters only ever
//! talk to the page through `select`, `exactly_one`, `text` and a few
//! element-level navigation helpers (children, siblings, ancestors), so the
//! extraction rules read as selector queries rather than pointer walks.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::strip_soft_hyphens;
use crate::error::LookupError;

/// A compiled CSS selector that remembers its source text for error messages.
#[derive(Debug)]
pub struct Query {
    css: &'static str,
    selector: Selector,
}

impl Query {
    pub fn new(css: &'static str) -> Result<Self, LookupError> {
        let selector = Selector::parse(css)
            .map_err(|e| LookupError::Parse(format!("selector `{css}`: {e:?}")))?;
        Ok(Self { css, selector })
    }

    pub fn css(&self) -> &'static str {
        self.css
    }
}

/// A fetched page. Owned by one lookup and dropped when extraction is done.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }

    pub fn select(&self, query: &Query) -> Vec<Node<'_>> {
        self.html.select(&query.selector).map(Node).collect()
    }

    pub fn exactly_one(&self, query: &Query) -> Result<Node<'_>, LookupError> {
        exactly_one(self.select(query), query)
    }
}

/// An element inside a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// Descendants matching `query`, in document order.
    pub fn select(self, query: &Query) -> Vec<Node<'a>> {
        self.0.select(&query.selector).map(Node).collect()
    }

    pub fn exactly_one(self, query: &Query) -> Result<Node<'a>, LookupError> {
        exactly_one(self.select(query), query)
    }

    /// All descendant text, depth-first, without soft hyphens. Not trimmed.
    pub fn text(self) -> String {
        let raw: String = self.0.text().collect();
        strip_soft_hyphens(&raw)
    }

    pub fn tag(self) -> &'a str {
        self.0.value().name()
    }

    pub fn is_tag(self, tag: &str) -> bool {
        self.tag().eq_ignore_ascii_case(tag)
    }

    pub fn has_class(self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    /// Enclosing elements, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = Node<'a>> {
        self.0.ancestors().filter_map(ElementRef::wrap).map(Node)
    }

    /// Nearest enclosing element with the given tag name.
    pub fn closest(self, tag: &str) -> Option<Node<'a>> {
        self.ancestors().find(|n| n.is_tag(tag))
    }

    /// Direct children, text nodes included.
    pub fn children(self) -> Vec<Child<'a>> {
        self.0
            .children()
            .filter_map(|c| {
                if let Some(text) = c.value().as_text() {
                    return Some(Child::Text(strip_soft_hyphens(text)));
                }
                ElementRef::wrap(c).map(|e| Child::Element(Node(e)))
            })
            .collect()
    }

    pub fn element_children(self) -> impl Iterator<Item = Node<'a>> {
        self.0.children().filter_map(ElementRef::wrap).map(Node)
    }

    pub fn first_element_child(self) -> Option<Node<'a>> {
        self.element_children().next()
    }

    pub fn last_element_child(self) -> Option<Node<'a>> {
        self.element_children().last()
    }

    pub fn next_element_siblings(self) -> impl Iterator<Item = Node<'a>> {
        self.0.next_siblings().filter_map(ElementRef::wrap).map(Node)
    }

    /// Preceding element siblings, nearest first.
    pub fn prev_element_siblings(self) -> impl Iterator<Item = Node<'a>> {
        self.0.prev_siblings().filter_map(ElementRef::wrap).map(Node)
    }

    /// Trimmed text of the first non-blank child (text node or element).
    pub fn label(self) -> String {
        self.children()
            .into_iter()
            .map(|c| s!(c.text().trim()))
            .find(|t| !t.is_empty())
            .unwrap_or_default()
    }
}

/// A direct child of a [`Node`].
#[derive(Clone, Debug)]
pub enum Child<'a> {
    Text(String),
    Element(Node<'a>),
}

impl<'a> Child<'a> {
    pub fn text(&self) -> String {
        match self {
            Child::Text(t) => t.clone(),
            Child::Element(n) => n.text(),
        }
    }

    pub fn element(&self) -> Option<Node<'a>> {
        match self {
            Child::Element(n) => Some(*n),
            Child::Text(_) => None,
        }
    }
}

fn exactly_one<'a>(nodes: Vec<Node<'a>>, query: &Query) -> Result<Node<'a>, LookupError> {
    match nodes.as_slice() {
        [] => Err(LookupError::MissingNode(s!(query.css()))),
        [one] => Ok(*one),
        _ => Err(LookupError::TooManyNodes(s!(query.css()))),
    }
}
