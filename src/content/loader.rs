//! Snapshot loader - loads entries from the source directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{Entry, EntryStore};
use crate::Sitedump;

/// Errors reading a single snapshot entry file
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads snapshot entries from the source directory
pub struct SnapshotLoader<'a> {
    dump: &'a Sitedump,
}

impl<'a> SnapshotLoader<'a> {
    /// Create a new snapshot loader
    pub fn new(dump: &'a Sitedump) -> Self {
        Self { dump }
    }

    /// Load all entries from source/entries into a store
    ///
    /// Entry files are visited in lexicographic path order so the store
    /// (and therefore every rendered listing) is reproducible across runs.
    /// Malformed files are skipped with a warning.
    pub fn load(&self) -> Result<EntryStore> {
        let entries_dir = self.dump.source_dir.join("entries");
        let mut store = EntryStore::new();
        if !entries_dir.exists() {
            return Ok(store);
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&entries_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_entry_file(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();
        paths.sort();

        for path in paths {
            match load_entry(&path) {
                Ok(entry) => store.insert(entry),
                Err(e) => {
                    tracing::warn!("Failed to load entry {:?}: {}", path, e);
                }
            }
        }

        check_parents(&store);

        Ok(store)
    }
}

/// Warn about pages pointing at parents that are not in the snapshot.
/// They still render, just outside any page's child listings.
fn check_parents(store: &EntryStore) {
    for page in store.pages() {
        if let Some(parent) = &page.parent {
            if store.page(parent).is_none() {
                tracing::warn!("Page {} references unknown parent {}", page.id, parent);
            }
        }
    }
}

/// Read and parse one entry file
fn load_entry(path: &Path) -> Result<Entry, SnapshotError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn is_entry_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("json"))
}
