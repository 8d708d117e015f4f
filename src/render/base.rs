//! Base content strategy - defaults shared by most page kinds

use super::{ContentStrategy, RenderContext};
use crate::markup::Element;

/// Strategy for page kinds with no specialized content
///
/// Uses the trait defaults as-is: no additional content, standard
/// attachments block.
pub struct BaseStrategy;

impl ContentStrategy for BaseStrategy {}

/// The standard attachments block: a list of file links with author and
/// updated time, one line per attachment in store order.
///
/// Returns `None` when the page has no attachments, never an empty block.
pub fn attachments_block(cx: &RenderContext<'_>) -> Option<Element> {
    if cx.attachments.is_empty() {
        return None;
    }
    let mut block = Element::new("div")
        .attr("class", "attachments")
        .child(Element::new("h4").text("Attachments"));
    for attachment in &cx.attachments {
        let entry = cx
            .factory
            .entry_element("div", "attachment", &attachment.id)
            .child(cx.factory.attachment_link(attachment))
            .text(" - on ")
            .child(cx.factory.updated_element(&attachment.updated))
            .text(" by ")
            .child(cx.factory.author_element(&attachment.author));
        block = block.child(entry);
    }
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AttachmentEntry, Entry, EntryStore, PageEntry, PageKind};
    use crate::render::PageRenderer;
    use chrono::{TimeZone, Utc};

    fn store_with_attachments(n: usize) -> EntryStore {
        let mut store = EntryStore::new();
        store.insert(Entry::Page(PageEntry {
            id: "home".to_string(),
            kind: PageKind::Web,
            title: "Home".to_string(),
            author: "Alice".to_string(),
            updated: Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
            parent: None,
            content: String::new(),
        }));
        for i in 0..n {
            store.insert(Entry::Attachment(AttachmentEntry {
                id: format!("att{}", i),
                parent: "home".to_string(),
                title: format!("File {}", i),
                author: "Alice".to_string(),
                updated: Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
                revision: 1,
                href: format!("files/file{}.pdf", i),
            }));
        }
        store
    }

    #[test]
    fn test_no_attachments_yields_none() {
        let store = store_with_attachments(0);
        let renderer = PageRenderer::new(store.page("home").unwrap(), &store);
        assert!(renderer.render_attachments().is_none());
    }

    #[test]
    fn test_standard_block_lists_each_attachment() {
        let store = store_with_attachments(3);
        let renderer = PageRenderer::new(store.page("home").unwrap(), &store);
        let block = renderer.render_attachments().unwrap();

        assert_eq!(block.attr_value("class"), Some("attachments"));
        let ids: Vec<_> = block
            .child_elements()
            .filter_map(|c| c.attr_value("id"))
            .collect();
        assert_eq!(ids, vec!["att0", "att1", "att2"]);
    }

    #[test]
    fn test_base_has_no_additional_content() {
        let store = store_with_attachments(2);
        let renderer = PageRenderer::new(store.page("home").unwrap(), &store);
        assert!(renderer.render_additional_content().is_none());
    }
}
