//! CLI subcommand implementations

pub mod clean;
pub mod export;
pub mod init;
pub mod list;
