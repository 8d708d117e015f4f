//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Sitedump;

/// Clean the public directory
pub fn run(dump: &Sitedump) -> Result<()> {
    if dump.public_dir.exists() {
        fs::remove_dir_all(&dump.public_dir)?;
        tracing::info!("Deleted: {:?}", dump.public_dir);
    }

    Ok(())
}
