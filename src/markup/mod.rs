//! Markup tree building and serialization
//!
//! Rendering produces a tree of [`Element`] nodes rather than strings, so
//! page renderers can be tested structurally and serialization stays in one
//! place.

use std::fmt::Write;

/// A child node of an element, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A nested element
    Element(Element),
    /// Literal text, escaped on serialization
    Text(String),
    /// Pre-rendered HTML, emitted verbatim
    Raw(String),
}

/// An ordered markup tree node: tag name, attributes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute (duplicates are kept in order)
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append literal text (escaped on serialization)
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    /// Append pre-rendered HTML without escaping
    pub fn raw(mut self, html: &str) -> Self {
        self.children.push(Child::Raw(html.to_string()));
        self
    }

    /// Tag name of this element
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Children in insertion order
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Value of the first attribute with the given name
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements only, skipping text and raw nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Concatenated text content of this subtree (raw nodes excluded)
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Serialize the tree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, r#" {}="{}""#, name, escape_html(value));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Child::Element(el) => el.write_html(out),
                Child::Text(text) => out.push_str(&escape_html(text)),
                Child::Raw(html) => out.push_str(html),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in el.children() {
        match child {
            Child::Element(inner) => collect_text(inner, out),
            Child::Text(text) => out.push_str(text),
            Child::Raw(_) => {}
        }
    }
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
