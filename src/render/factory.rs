//! Element factory - presentation sub-trees for entry metadata
//!
//! Every renderer builds its field markup through this factory so exported
//! pages carry uniform hAtom-style classes that downstream tooling can pick
//! apart again.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, CONTROLS};

use crate::content::AttachmentEntry;
use crate::markup::Element;

/// Builds presentation sub-trees for entry fields
#[derive(Debug, Clone)]
pub struct ElementFactory {
    date_format: String,
}

impl Default for ElementFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementFactory {
    /// Create a factory with the default date display format
    pub fn new() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    /// Create a factory with a custom chrono date display format
    pub fn with_date_format(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
        }
    }

    /// Enclosing element for one entry: carries the entry class and id
    pub fn entry_element(&self, tag: &str, class: &str, id: &str) -> Element {
        Element::new(tag)
            .attr("class", &format!("hentry {}", class))
            .attr("id", id)
    }

    /// Row element enclosing one attachment
    pub fn attachment_row(&self, attachment: &AttachmentEntry) -> Element {
        self.entry_element("tr", "attachment", &attachment.id)
    }

    /// Title sub-tree
    pub fn title_element(&self, title: &str) -> Element {
        Element::new("span").attr("class", "entry-title").text(title)
    }

    /// Title sub-tree that links to the attachment payload
    pub fn attachment_link(&self, attachment: &AttachmentEntry) -> Element {
        Element::new("a")
            .attr("class", "entry-title")
            .attr("href", &encode_href(&attachment.href))
            .text(&attachment.title)
    }

    /// Updated-timestamp sub-tree, machine-readable time in the title attr
    pub fn updated_element(&self, updated: &DateTime<Utc>) -> Element {
        Element::new("abbr")
            .attr("class", "updated")
            .attr("title", &updated.to_rfc3339())
            .text(&updated.format(&self.date_format).to_string())
    }

    /// Author sub-tree
    pub fn author_element(&self, author: &str) -> Element {
        Element::new("span")
            .attr("class", "author vcard")
            .child(Element::new("span").attr("class", "fn").text(author))
    }

    /// Revision sub-tree
    pub fn revision_element(&self, revision: u32) -> Element {
        Element::new("span")
            .attr("class", "sites:revision")
            .text(&revision.to_string())
    }
}

/// Percent-encode an attachment location so spaces and control characters
/// survive as a usable href
fn encode_href(href: &str) -> String {
    const UNSAFE: &percent_encoding::AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>');
    utf8_percent_encode(href, UNSAFE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn attachment() -> AttachmentEntry {
        AttachmentEntry {
            id: "doc1".to_string(),
            parent: "cabinet".to_string(),
            title: "Doc1".to_string(),
            author: "Alice".to_string(),
            updated: Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
            revision: 3,
            href: "files/my doc.pdf".to_string(),
        }
    }

    #[test]
    fn test_attachment_row_carries_class_and_id() {
        let row = ElementFactory::new().attachment_row(&attachment());
        assert_eq!(row.tag(), "tr");
        assert_eq!(row.attr_value("class"), Some("hentry attachment"));
        assert_eq!(row.attr_value("id"), Some("doc1"));
    }

    #[test]
    fn test_title_element() {
        let el = ElementFactory::new().title_element("Doc1");
        assert_eq!(el.to_html(), r#"<span class="entry-title">Doc1</span>"#);
    }

    #[test]
    fn test_updated_element_formats_date() {
        let factory = ElementFactory::new();
        let el = factory.updated_element(&attachment().updated);
        assert_eq!(el.tag(), "abbr");
        assert_eq!(el.attr_value("title"), Some("2009-01-01T00:00:00+00:00"));
        assert_eq!(el.text_content(), "2009-01-01");
    }

    #[test]
    fn test_author_element_nests_fn() {
        let el = ElementFactory::new().author_element("Alice");
        assert_eq!(
            el.to_html(),
            r#"<span class="author vcard"><span class="fn">Alice</span></span>"#
        );
    }

    #[test]
    fn test_revision_element() {
        let el = ElementFactory::new().revision_element(3);
        assert_eq!(el.text_content(), "3");
    }

    #[test]
    fn test_attachment_link_encodes_href() {
        let el = ElementFactory::new().attachment_link(&attachment());
        assert_eq!(el.attr_value("href"), Some("files/my%20doc.pdf"));
        assert_eq!(el.text_content(), "Doc1");
    }
}
