//! Helper functions shared by the export pipeline

mod url;

pub use url::*;
