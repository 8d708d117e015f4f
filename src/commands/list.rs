//! List snapshot content

use anyhow::Result;

use crate::content::SnapshotLoader;
use crate::Sitedump;

/// List snapshot content by type
pub fn run(dump: &Sitedump, content_type: &str) -> Result<()> {
    let loader = SnapshotLoader::new(dump);
    let store = loader.load()?;

    match content_type {
        "page" | "pages" => {
            println!("Pages ({}):", store.page_count());
            for page in store.pages() {
                println!(
                    "  {} - {} [{}] ({})",
                    page.updated.format("%Y-%m-%d"),
                    page.title,
                    page.id,
                    page.kind.as_class()
                );
            }
        }
        "attachment" | "attachments" => {
            println!("Attachments ({}):", store.attachment_count());
            for page in store.pages() {
                for att in store.attachments_of(&page.id) {
                    println!(
                        "  {} - {} v{} (on {})",
                        att.updated.format("%Y-%m-%d"),
                        att.title,
                        att.revision,
                        page.title
                    );
                }
            }
        }
        "comment" | "comments" => {
            println!("Comments ({}):", store.comment_count());
            for page in store.pages() {
                for comment in store.comments_of(&page.id) {
                    println!(
                        "  {} - {} (on {})",
                        comment.updated.format("%Y-%m-%d"),
                        comment.author,
                        page.title
                    );
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: page, attachment, comment",
                content_type
            );
        }
    }

    Ok(())
}
