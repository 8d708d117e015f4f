//! sitedump-rs: a fast exporter for structured site snapshots
//!
//! This crate turns a site snapshot (pages, attachments, comments stored as
//! JSON entries) into a tree of static HTML documents, one per page.

pub mod commands;
pub mod config;
pub mod content;
pub mod export;
pub mod helpers;
pub mod markup;
pub mod render;

use anyhow::Result;
use std::path::Path;

/// The main sitedump application
#[derive(Clone)]
pub struct Sitedump {
    /// Export configuration
    pub config: config::ExportConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source (snapshot) directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Sitedump {
    /// Create a new Sitedump instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_export.yml");

        let config = if config_path.exists() {
            config::ExportConfig::load(&config_path)?
        } else {
            config::ExportConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Export the snapshot to static HTML
    pub fn export(&self) -> Result<()> {
        commands::export::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
