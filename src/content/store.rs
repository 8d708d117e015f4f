//! In-memory entry store
//!
//! Holds one loaded site snapshot and answers parent/child lookups. Entries
//! keep their insertion order; nothing here re-sorts, so renderers see
//! attachments and subpages exactly in the order the loader supplied them.

use indexmap::IndexMap;

use super::{AttachmentEntry, CommentEntry, Entry, PageEntry};

/// Read-only (after loading) store of snapshot entries
#[derive(Debug, Default)]
pub struct EntryStore {
    pages: IndexMap<String, PageEntry>,
    attachments: IndexMap<String, AttachmentEntry>,
    comments: IndexMap<String, CommentEntry>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entry, replacing any previous entry with the same id
    pub fn insert(&mut self, entry: Entry) {
        let id = entry.id().to_string();
        let replaced = match entry {
            Entry::Page(page) => self.pages.insert(id.clone(), page).is_some(),
            Entry::Attachment(att) => self.attachments.insert(id.clone(), att).is_some(),
            Entry::Comment(comment) => self.comments.insert(id.clone(), comment).is_some(),
        };
        if replaced {
            tracing::warn!("Duplicate entry id {}, keeping the last one", id);
        }
    }

    /// Look up a page by id
    pub fn page(&self, id: &str) -> Option<&PageEntry> {
        self.pages.get(id)
    }

    /// All pages in insertion order
    pub fn pages(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.values()
    }

    /// Attachments of a page, in insertion order
    pub fn attachments_of(&self, page_id: &str) -> Vec<&AttachmentEntry> {
        self.attachments
            .values()
            .filter(|a| a.parent == page_id)
            .collect()
    }

    /// Comments on a page, in insertion order
    pub fn comments_of(&self, page_id: &str) -> Vec<&CommentEntry> {
        self.comments
            .values()
            .filter(|c| c.parent == page_id)
            .collect()
    }

    /// Child pages of a page, in insertion order
    pub fn subpages_of(&self, page_id: &str) -> Vec<&PageEntry> {
        self.pages
            .values()
            .filter(|p| p.parent.as_deref() == Some(page_id))
            .collect()
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of attachments
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    /// Number of comments
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Whether the store holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.attachments.is_empty() && self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageKind;
    use chrono::{TimeZone, Utc};

    fn page(id: &str, kind: PageKind, parent: Option<&str>) -> Entry {
        Entry::Page(PageEntry {
            id: id.to_string(),
            kind,
            title: id.to_string(),
            author: "Alice".to_string(),
            updated: Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
            parent: parent.map(String::from),
            content: String::new(),
        })
    }

    fn attachment(id: &str, parent: &str) -> Entry {
        Entry::Attachment(AttachmentEntry {
            id: id.to_string(),
            parent: parent.to_string(),
            title: id.to_string(),
            author: "Alice".to_string(),
            updated: Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
            revision: 1,
            href: String::new(),
        })
    }

    #[test]
    fn test_attachments_keep_insertion_order() {
        let mut store = EntryStore::new();
        store.insert(page("cabinet", PageKind::FileCabinet, None));
        for id in ["c", "a", "b"] {
            store.insert(attachment(id, "cabinet"));
        }
        // Also one attachment on another page, which must not leak in.
        store.insert(page("other", PageKind::Web, None));
        store.insert(attachment("x", "other"));

        let ids: Vec<_> = store
            .attachments_of("cabinet")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_subpages_of() {
        let mut store = EntryStore::new();
        store.insert(page("root", PageKind::Web, None));
        store.insert(page("child2", PageKind::Web, Some("root")));
        store.insert(page("child1", PageKind::FileCabinet, Some("root")));

        let ids: Vec<_> = store
            .subpages_of("root")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["child2", "child1"]);
    }

    #[test]
    fn test_missing_page_lookup() {
        let store = EntryStore::new();
        assert!(store.page("nope").is_none());
        assert!(store.attachments_of("nope").is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let mut store = EntryStore::new();
        store.insert(page("p", PageKind::Web, None));
        store.insert(page("p", PageKind::FileCabinet, None));
        assert_eq!(store.page_count(), 1);
        assert_eq!(store.page("p").unwrap().kind, PageKind::FileCabinet);
    }
}
