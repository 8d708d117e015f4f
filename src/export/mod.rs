//! Export module - writes one static HTML document per page
//!
//! The page shell built here is deliberately plain: head with title and
//! canonical link, body with the renderer's blocks in a fixed order. Blocks
//! a renderer reports as "no content" are left out entirely.

use anyhow::Result;
use std::fs;

use crate::content::{EntryStore, PageEntry};
use crate::helpers::full_url_for;
use crate::markup::Element;
use crate::render::{ElementFactory, PageRenderer};
use crate::Sitedump;

/// Writes a loaded snapshot as a static HTML tree
pub struct SiteExporter {
    dump: Sitedump,
}

impl SiteExporter {
    /// Create a new exporter
    pub fn new(dump: &Sitedump) -> Self {
        Self { dump: dump.clone() }
    }

    /// Export every page in the store
    pub fn export(&self, store: &EntryStore) -> Result<()> {
        fs::create_dir_all(&self.dump.public_dir)?;

        let mut count = 0;
        for page in store.pages() {
            self.export_page(page, store)?;
            count += 1;
        }

        tracing::info!("Exported {} pages", count);
        Ok(())
    }

    /// Render one page and write it under its slug path
    fn export_page(&self, page: &PageEntry, store: &EntryStore) -> Result<()> {
        let factory = ElementFactory::with_date_format(&self.dump.config.date_format);
        let renderer = PageRenderer::with_factory(page, store, factory);

        let path = page_path(page, store);
        let doc = self.build_document(&renderer, &path);
        let html = format!("<!DOCTYPE html>\n{}\n", doc.to_html());

        let output_path = self.dump.public_dir.join(&path).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, &html)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Exported page: {:?}", output_path);

        Ok(())
    }

    /// Assemble the full document around the renderer's blocks
    fn build_document(&self, renderer: &PageRenderer<'_>, path: &str) -> Element {
        let page = renderer.entry();
        let config = &self.dump.config;

        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("title").text(&format!("{} - {}", page.title, config.title)))
            .child(
                Element::new("link")
                    .attr("rel", "canonical")
                    .attr("href", &full_url_for(config, &format!("{}/index.html", path))),
            );

        let mut body = Element::new("body").child(renderer.render_title());
        let sections = [
            renderer.render_content(),
            renderer.render_additional_content(),
            renderer.render_attachments(),
            renderer.render_comments(),
            renderer.render_subpage_links(),
        ];
        for section in sections.into_iter().flatten() {
            body = body.child(section);
        }

        Element::new("html")
            .attr("lang", &config.language)
            .child(head)
            .child(body)
    }
}

/// Output path of a page: parent slugs joined from the root down
pub fn page_path(page: &PageEntry, store: &EntryStore) -> String {
    let mut parts = vec![page.slug()];
    let mut current = page.parent.as_deref();
    let mut depth = 0;
    while let Some(parent_id) = current {
        depth += 1;
        if depth > 32 {
            tracing::warn!("Parent chain of page {} is too deep, truncating", page.id);
            break;
        }
        match store.page(parent_id) {
            Some(parent) => {
                parts.push(parent.slug());
                current = parent.parent.as_deref();
            }
            None => break,
        }
    }
    parts.reverse();
    parts.join("/")
}
