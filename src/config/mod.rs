pub mod policy;

pub use policy::QualityPolicy;

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "book-sync")]
#[command(about = "Book catalog synchronization and review quality checks")]
pub struct Cli {
    #[arg(long, default_value = "https://openlibrary.org")]
    pub metadata_endpoint: String,

    #[arg(long, default_value = "./catalog.json")]
    pub catalog_path: String,

    #[arg(long, help = "TOML file overriding the review quality policy")]
    pub policy_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process one synchronization request for the given ISBN
    Sync {
        #[arg(long)]
        isbn: String,
    },
    /// Check one review text against the quality policy
    Verify { text: String },
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_url("metadata_endpoint", &self.metadata_endpoint)?;
        Ok(())
    }
}
