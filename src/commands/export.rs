//! Export the snapshot to static HTML

use anyhow::Result;

use crate::content::SnapshotLoader;
use crate::export::SiteExporter;
use crate::Sitedump;

/// Load the snapshot and export every page
pub fn run(dump: &Sitedump) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = SnapshotLoader::new(dump);
    let store = loader.load()?;

    tracing::info!(
        "Loaded {} pages, {} attachments, {} comments",
        store.page_count(),
        store.attachment_count(),
        store.comment_count()
    );

    if store.is_empty() {
        tracing::warn!("Snapshot is empty, nothing to export");
        return Ok(());
    }

    let exporter = SiteExporter::new(dump);
    exporter.export(&store)?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(())
}
