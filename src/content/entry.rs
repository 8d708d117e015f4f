//! Snapshot entry models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a site page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Plain web page
    Web,
    /// File cabinet page: a downloadable-file listing
    FileCabinet,
    /// Announcements container page
    Announcements,
    /// A single announcement under an announcements page
    Announcement,
}

impl PageKind {
    /// CSS class used to mark the page kind in exported markup
    pub fn as_class(&self) -> &'static str {
        match self {
            PageKind::Web => "webpage",
            PageKind::FileCabinet => "filecabinet",
            PageKind::Announcements => "announcementspage",
            PageKind::Announcement => "announcement",
        }
    }
}

/// A site page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    /// Unique entry id
    pub id: String,

    /// Page kind, drives which renderer strategy is used
    pub kind: PageKind,

    /// Page title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Last updated time
    pub updated: DateTime<Utc>,

    /// Parent page id, absent for top-level pages
    #[serde(default)]
    pub parent: Option<String>,

    /// Main page body, already rendered HTML
    #[serde(default)]
    pub content: String,
}

impl PageEntry {
    /// URL-friendly name derived from the title
    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }
}

/// A file attached to a page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentEntry {
    /// Unique entry id
    pub id: String,

    /// Id of the page the file is attached to
    pub parent: String,

    /// File title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Last updated time
    pub updated: DateTime<Utc>,

    /// Revision number of the file
    pub revision: u32,

    /// Relative location of the file payload
    #[serde(default)]
    pub href: String,
}

/// A comment left on a page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEntry {
    /// Unique entry id
    pub id: String,

    /// Id of the page the comment belongs to
    pub parent: String,

    /// Author display name
    pub author: String,

    /// Posted/updated time
    pub updated: DateTime<Utc>,

    /// Comment body, already rendered HTML
    #[serde(default)]
    pub content: String,
}

/// One entry of a site snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Page(PageEntry),
    Attachment(AttachmentEntry),
    Comment(CommentEntry),
}

impl Entry {
    /// Unique id of the inner entry
    pub fn id(&self) -> &str {
        match self {
            Entry::Page(p) => &p.id,
            Entry::Attachment(a) => &a.id,
            Entry::Comment(c) => &c.id,
        }
    }
}
