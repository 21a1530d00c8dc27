pub mod doctor;
pub mod init;
pub mod migrate;
pub mod normalize;
pub mod resolve;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "waypost")]
#[command(version)]
#[command(about = "Media asset resolution and serving", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "waypost.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a config file, storage directory, and database
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        origin: Option<String>,
    },
    /// Run migrations and start the HTTP service
    Serve {
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Suppress diagnostic detail in error responses
        #[arg(long)]
        production: bool,
    },
    /// Apply pending migrations and exit
    Migrate,
    /// Resolve a logical asset name to its stored filename
    Resolve {
        /// Logical name, e.g. "hero-interior.jpg" or "uploads/hero-interior-2.jpg"
        name: String,
    },
    /// Print the canonical URL for an asset reference
    Normalize {
        reference: String,
    },
    /// Check config, database, storage root, and record/file integrity
    Doctor,
}
