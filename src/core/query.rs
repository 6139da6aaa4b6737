// src/core/query.rs
//! Document query layer.
//!
//! Two primitives over a parsed page, plus text extraction:
//! - *within*: the first (or every) descendant of a node that matches a [`Query`].
//! - *after*: the first element that follows a node in document order, which
//!   includes the node's own descendants and everything past its end tag.
//!
//! Every detector and locator is built from these. Nothing here keeps a cursor
//! between calls; the starting node is the only state.

use regex::Regex;
use scraper::{ElementRef, Html};

/// A parsed document.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// The `<html>` element. Searching "within" it covers the whole page.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

#[derive(Debug, Clone)]
enum IdRule {
    Exact(String),
    Pattern(Regex),
}

/// Element matcher: tag name, one class, and an exact or regex id.
/// Unset parts match anything.
#[derive(Debug, Clone, Default)]
pub struct Query {
    tag: Option<&'static str>,
    class: Option<String>,
    id: Option<IdRule>,
}

impl Query {
    pub fn tag(tag: &'static str) -> Self {
        Self { tag: Some(tag), ..Self::default() }
    }

    pub fn any() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(s!(class));
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(IdRule::Exact(s!(id)));
        self
    }

    /// Id matched by regex *search*, not a full match.
    pub fn id_pattern(mut self, re: Regex) -> Self {
        self.id = Some(IdRule::Pattern(re));
        self
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let v = el.value();
        if let Some(tag) = self.tag {
            if !v.name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !v.classes().any(|c| c == class) {
                return false;
            }
        }
        match (&self.id, v.id()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(IdRule::Exact(want)), Some(id)) => want == id,
            (Some(IdRule::Pattern(re)), Some(id)) => re.is_match(id),
        }
    }
}

/// Strict descendants of `node`, in document order.
fn descendants<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Every element after `node`'s start tag, in document order.
fn following<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    let past_end = std::iter::once(*node)
        .chain(node.ancestors())
        .flat_map(|n| n.next_siblings())
        .flat_map(|n| n.descendants());
    node.descendants()
        .skip(1)
        .chain(past_end)
        .filter_map(ElementRef::wrap)
}

pub fn find_within<'a>(node: ElementRef<'a>, q: &Query) -> Option<ElementRef<'a>> {
    descendants(node).find(|el| q.matches(el))
}

pub fn exists_within(node: ElementRef<'_>, q: &Query) -> bool {
    find_within(node, q).is_some()
}

pub fn find_all_within<'a>(node: ElementRef<'a>, q: &Query) -> Vec<ElementRef<'a>> {
    descendants(node).filter(|el| q.matches(el)).collect()
}

pub fn find_after<'a>(node: ElementRef<'a>, q: &Query) -> Option<ElementRef<'a>> {
    following(node).find(|el| q.matches(el))
}

pub fn exists_after(node: ElementRef<'_>, q: &Query) -> bool {
    find_after(node, q).is_some()
}

/// All text under `node`, concatenated without separators.
pub fn text_of(node: ElementRef<'_>) -> String {
    node.text().collect()
}

pub fn attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}
