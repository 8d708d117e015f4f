//! Content module - the site snapshot model and its store

mod entry;
pub mod loader;
mod store;

pub use entry::{AttachmentEntry, CommentEntry, Entry, PageEntry, PageKind};
pub use loader::SnapshotLoader;
pub use store::EntryStore;
