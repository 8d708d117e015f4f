//! File cabinet content strategy
//!
//! A file cabinet page shows its attachments as the page content itself: a
//! table with one row per file. The standard attachments block would repeat
//! the same files below the table, so this strategy suppresses it.

use super::{ContentStrategy, RenderContext};
use crate::content::{PageEntry, PageKind};
use crate::markup::Element;

/// Strategy for file cabinet pages
pub struct FileCabinetStrategy;

impl FileCabinetStrategy {
    /// Create the strategy for the given page
    ///
    /// Panics if the entry is not a file cabinet page; callers dispatch on
    /// the page kind, so anything else is a programming error.
    pub fn for_page(entry: &PageEntry) -> Self {
        assert!(
            entry.kind == PageKind::FileCabinet,
            "page {} is not a file cabinet page",
            entry.id
        );
        Self
    }
}

impl ContentStrategy for FileCabinetStrategy {
    /// The file cabinet table: one row per attachment, in store order, with
    /// title, updated, author, and revision cells.
    fn additional_content(&self, cx: &RenderContext<'_>) -> Option<Element> {
        if cx.attachments.is_empty() {
            return None;
        }
        let mut table = Element::new("table");
        for attachment in &cx.attachments {
            let row = cx
                .factory
                .attachment_row(attachment)
                .child(Element::new("td").child(cx.factory.title_element(&attachment.title)))
                .child(Element::new("td").child(cx.factory.updated_element(&attachment.updated)))
                .child(Element::new("td").child(cx.factory.author_element(&attachment.author)))
                .child(
                    Element::new("td")
                        .text("(Version ")
                        .child(cx.factory.revision_element(attachment.revision))
                        .text(")"),
                );
            table = table.child(row);
        }
        Some(table)
    }

    /// The table above fully replaces the standard attachments block.
    fn attachments(&self, _cx: &RenderContext<'_>) -> Option<Element> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AttachmentEntry, Entry, EntryStore};
    use crate::markup::Child;
    use crate::render::PageRenderer;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn cabinet_page(id: &str) -> PageEntry {
        PageEntry {
            id: id.to_string(),
            kind: PageKind::FileCabinet,
            title: "Downloads".to_string(),
            author: "Alice".to_string(),
            updated: date(2009, 1, 1),
            parent: None,
            content: String::new(),
        }
    }

    fn attachment(id: &str, title: &str, updated: DateTime<Utc>, author: &str, rev: u32) -> Entry {
        Entry::Attachment(AttachmentEntry {
            id: id.to_string(),
            parent: "cabinet".to_string(),
            title: title.to_string(),
            author: author.to_string(),
            updated,
            revision: rev,
            href: format!("files/{}.pdf", id),
        })
    }

    fn cabinet_store(attachments: Vec<Entry>) -> EntryStore {
        let mut store = EntryStore::new();
        store.insert(Entry::Page(cabinet_page("cabinet")));
        for att in attachments {
            store.insert(att);
        }
        store
    }

    #[test]
    fn test_empty_cabinet_renders_no_table() {
        let store = cabinet_store(vec![]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        assert!(renderer.render_additional_content().is_none());
        assert!(renderer.render_attachments().is_none());
    }

    #[test]
    fn test_table_has_one_row_per_attachment_with_four_cells() {
        let store = cabinet_store(vec![
            attachment("d1", "Doc1", date(2009, 1, 1), "Alice", 3),
            attachment("d2", "Doc2", date(2009, 2, 1), "Bob", 1),
            attachment("d3", "Doc3", date(2009, 3, 1), "Carol", 7),
        ]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        let table = renderer.render_additional_content().unwrap();

        assert_eq!(table.tag(), "table");
        let rows: Vec<_> = table.child_elements().collect();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.tag(), "tr");
            let cells: Vec<_> = row.child_elements().collect();
            assert_eq!(cells.len(), 4);
            assert!(cells.iter().all(|c| c.tag() == "td"));
        }
    }

    #[test]
    fn test_cell_order_is_title_updated_author_revision() {
        let store = cabinet_store(vec![attachment("d1", "Doc1", date(2009, 1, 1), "Alice", 3)]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        let table = renderer.render_additional_content().unwrap();

        let row = table.child_elements().next().unwrap();
        let cells: Vec<_> = row.child_elements().collect();
        let classes: Vec<_> = cells
            .iter()
            .map(|c| {
                c.child_elements()
                    .next()
                    .and_then(|inner| inner.attr_value("class"))
                    .unwrap()
            })
            .collect();
        assert_eq!(
            classes,
            vec!["entry-title", "updated", "author vcard", "sites:revision"]
        );
    }

    #[test]
    fn test_revision_cell_nests_subtree_between_literals() {
        let store = cabinet_store(vec![attachment("d1", "Doc1", date(2009, 1, 1), "Alice", 3)]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        let table = renderer.render_additional_content().unwrap();

        let row = table.child_elements().next().unwrap();
        let revision_cell = row.child_elements().nth(3).unwrap();
        match revision_cell.children() {
            [Child::Text(open), Child::Element(rev), Child::Text(close)] => {
                assert_eq!(open, "(Version ");
                assert_eq!(rev.attr_value("class"), Some("sites:revision"));
                assert_eq!(close, ")");
            }
            other => panic!("unexpected revision cell shape: {:?}", other),
        }
    }

    #[test]
    fn test_two_attachment_scenario() {
        let store = cabinet_store(vec![
            attachment("d1", "Doc1", date(2009, 1, 1), "Alice", 3),
            attachment("d2", "Doc2", date(2009, 2, 1), "Bob", 1),
        ]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        let table = renderer.render_additional_content().unwrap();

        let rows: Vec<_> = table.child_elements().collect();
        assert_eq!(rows.len(), 2);
        let versions: Vec<_> = rows
            .iter()
            .map(|r| r.child_elements().nth(3).unwrap().text_content())
            .collect();
        assert_eq!(versions, vec!["(Version 3)", "(Version 1)"]);
    }

    #[test]
    fn test_row_order_matches_store_order() {
        let store = cabinet_store(vec![
            attachment("z", "Zeta", date(2009, 3, 1), "Alice", 1),
            attachment("a", "Alpha", date(2009, 1, 1), "Bob", 2),
            attachment("m", "Mid", date(2009, 2, 1), "Carol", 3),
        ]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        let table = renderer.render_additional_content().unwrap();

        let ids: Vec<_> = table
            .child_elements()
            .filter_map(|r| r.attr_value("id"))
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_attachments_block_always_suppressed() {
        let store = cabinet_store(vec![
            attachment("d1", "Doc1", date(2009, 1, 1), "Alice", 3),
            attachment("d2", "Doc2", date(2009, 2, 1), "Bob", 1),
        ]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        assert!(renderer.render_attachments().is_none());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let store = cabinet_store(vec![
            attachment("d1", "Doc1", date(2009, 1, 1), "Alice", 3),
            attachment("d2", "Doc2", date(2009, 2, 1), "Bob", 1),
        ]);
        let renderer = PageRenderer::new(store.page("cabinet").unwrap(), &store);
        let first = renderer.render_additional_content().unwrap();
        let second = renderer.render_additional_content().unwrap();
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    #[should_panic(expected = "not a file cabinet page")]
    fn test_wrong_kind_violates_precondition() {
        let mut page = cabinet_page("home");
        page.kind = PageKind::Web;
        let _ = FileCabinetStrategy::for_page(&page);
    }
}
