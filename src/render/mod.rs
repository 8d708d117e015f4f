//! Page renderers - turn one page entry into markup fragments
//!
//! Each page kind supplies a [`ContentStrategy`] with two operations: the
//! kind-specific "additional content" block and the attachments block. The
//! generic [`PageRenderer`] gathers the page's collections from the store
//! once at construction and delegates both operations to the strategy, so a
//! kind can replace or suppress the defaults without any shared state.
//!
//! Returning `None` from an operation is the explicit "no content" result;
//! the exporter skips that section entirely.

mod base;
mod factory;
mod file_cabinet;

pub use base::BaseStrategy;
pub use factory::ElementFactory;
pub use file_cabinet::FileCabinetStrategy;

use crate::content::{AttachmentEntry, CommentEntry, EntryStore, PageEntry, PageKind};
use crate::markup::Element;

/// Read-only view of one page and its collections, shared with strategies
pub struct RenderContext<'a> {
    /// The page being rendered
    pub entry: &'a PageEntry,
    /// The store the page came from
    pub store: &'a EntryStore,
    /// Attachments of the page, in store order
    pub attachments: Vec<&'a AttachmentEntry>,
    /// Comments on the page, in store order
    pub comments: Vec<&'a CommentEntry>,
    /// Child pages, in store order
    pub subpages: Vec<&'a PageEntry>,
    /// Factory for field sub-trees
    pub factory: ElementFactory,
}

/// Per-page-kind content operations
///
/// The defaults are the base behavior shared by most page kinds: no extra
/// content, and the standard attachments block.
pub trait ContentStrategy {
    /// Extra content specific to the page kind, below the main body
    fn additional_content(&self, _cx: &RenderContext<'_>) -> Option<Element> {
        None
    }

    /// The attachments block for the page
    fn attachments(&self, cx: &RenderContext<'_>) -> Option<Element> {
        base::attachments_block(cx)
    }
}

/// Renders exactly one page entry per rendering pass
///
/// Immutable after construction; no markup is built until one of the
/// `render_*` operations is called.
pub struct PageRenderer<'a> {
    cx: RenderContext<'a>,
    strategy: Box<dyn ContentStrategy>,
}

impl<'a> PageRenderer<'a> {
    /// Create a renderer for the page, picking the strategy by page kind
    pub fn new(entry: &'a PageEntry, store: &'a EntryStore) -> Self {
        Self::with_factory(entry, store, ElementFactory::new())
    }

    /// Create a renderer using a custom element factory
    pub fn with_factory(
        entry: &'a PageEntry,
        store: &'a EntryStore,
        factory: ElementFactory,
    ) -> Self {
        let strategy: Box<dyn ContentStrategy> = match entry.kind {
            PageKind::FileCabinet => Box::new(FileCabinetStrategy::for_page(entry)),
            _ => Box::new(BaseStrategy),
        };
        let cx = RenderContext {
            entry,
            store,
            attachments: store.attachments_of(&entry.id),
            comments: store.comments_of(&entry.id),
            subpages: store.subpages_of(&entry.id),
            factory,
        };
        Self { cx, strategy }
    }

    /// The page this renderer is bound to
    pub fn entry(&self) -> &PageEntry {
        self.cx.entry
    }

    /// Page title heading
    pub fn render_title(&self) -> Element {
        Element::new("h3")
            .child(self.cx.factory.title_element(&self.cx.entry.title))
    }

    /// Main page body, absent when the page has no body
    pub fn render_content(&self) -> Option<Element> {
        if self.cx.entry.content.is_empty() {
            return None;
        }
        Some(
            Element::new("div")
                .attr("class", "entry-content")
                .raw(&self.cx.entry.content),
        )
    }

    /// Kind-specific content block, delegated to the strategy
    pub fn render_additional_content(&self) -> Option<Element> {
        self.strategy.additional_content(&self.cx)
    }

    /// Attachments block, delegated to the strategy
    pub fn render_attachments(&self) -> Option<Element> {
        self.strategy.attachments(&self.cx)
    }

    /// Comments block, shared by all page kinds
    pub fn render_comments(&self) -> Option<Element> {
        if self.cx.comments.is_empty() {
            return None;
        }
        let mut block = Element::new("div")
            .attr("class", "comments")
            .child(Element::new("h4").text("Comments"));
        for comment in &self.cx.comments {
            let entry = self
                .cx
                .factory
                .entry_element("div", "comment", &comment.id)
                .child(self.cx.factory.author_element(&comment.author))
                .text(" - ")
                .child(self.cx.factory.updated_element(&comment.updated))
                .child(
                    Element::new("div")
                        .attr("class", "entry-content")
                        .raw(&comment.content),
                );
            block = block.child(entry);
        }
        Some(block)
    }

    /// Links to child pages, shared by all page kinds
    pub fn render_subpage_links(&self) -> Option<Element> {
        if self.cx.subpages.is_empty() {
            return None;
        }
        let mut block = Element::new("div")
            .attr("class", "subpages")
            .text("Subpages: ");
        for (i, subpage) in self.cx.subpages.iter().enumerate() {
            if i > 0 {
                block = block.text(", ");
            }
            block = block.child(
                Element::new("a")
                    .attr("href", &format!("{}/index.html", subpage.slug()))
                    .text(&subpage.title),
            );
        }
        Some(block)
    }
}
