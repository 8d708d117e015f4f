//! URL helper functions

use crate::config::ExportConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/downloads/") // -> "/wiki/downloads/"
/// ```
pub fn url_for(config: &ExportConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/downloads/") // -> "https://example.com/wiki/downloads/"
/// ```
pub fn full_url_for(config: &ExportConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}
