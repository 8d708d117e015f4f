//! CLI entry point for sitedump-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sitedump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A fast exporter that turns structured site snapshots into static HTML", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a snapshot directory with a sample site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Export the snapshot to static HTML
    #[command(alias = "e")]
    Export,

    /// List snapshot content
    List {
        /// Type of content to list (page, attachment, comment)
        #[arg(default_value = "page")]
        r#type: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "sitedump_rs=debug,info"
    } else {
        "sitedump_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing snapshot in {:?}", target_dir);
            sitedump_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized snapshot in {:?}", target_dir);
        }

        Commands::Export => {
            let dump = sitedump_rs::Sitedump::new(&base_dir)?;
            tracing::info!("Exporting snapshot...");
            dump.export()?;
            println!("Exported successfully!");
        }

        Commands::List { r#type } => {
            let dump = sitedump_rs::Sitedump::new(&base_dir)?;
            sitedump_rs::commands::list::run(&dump, &r#type)?;
        }

        Commands::Clean => {
            let dump = sitedump_rs::Sitedump::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            dump.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("sitedump-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
