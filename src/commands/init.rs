//! Initialize a new snapshot directory

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a snapshot skeleton with a small sample site
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("source/entries"))?;
    fs::create_dir_all(target_dir.join("source/files"))?;

    // Create default _export.yml
    let config_content = r#"# sitedump configuration

# Site
title: Exported Site
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public

# Display format for timestamps (chrono strftime)
date_format: '%Y-%m-%d'
"#;
    fs::write(target_dir.join("_export.yml"), config_content)?;

    // A minimal sample snapshot: one web page with a file cabinet below it.
    let entries = target_dir.join("source/entries");
    fs::write(
        entries.join("01-home.json"),
        r#"{
  "type": "page",
  "kind": "web",
  "id": "home",
  "title": "Home",
  "author": "John Doe",
  "updated": "2024-01-01T00:00:00Z",
  "content": "<p>Welcome to the exported site.</p>"
}
"#,
    )?;
    fs::write(
        entries.join("02-downloads.json"),
        r#"{
  "type": "page",
  "kind": "file_cabinet",
  "id": "downloads",
  "title": "Downloads",
  "author": "John Doe",
  "updated": "2024-01-01T00:00:00Z",
  "parent": "home"
}
"#,
    )?;
    fs::write(
        entries.join("03-manual.json"),
        r#"{
  "type": "attachment",
  "id": "manual",
  "parent": "downloads",
  "title": "User Manual",
  "author": "John Doe",
  "updated": "2024-01-01T00:00:00Z",
  "revision": 1,
  "href": "files/manual.pdf"
}
"#,
    )?;

    tracing::info!("Initialized snapshot in {:?}", target_dir);
    Ok(())
}
