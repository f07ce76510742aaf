use book_sync::config::{Cli, Command};
use book_sync::utils::{logger, validation::Validate};
use book_sync::{
    JsonFileRepository, OpenLibraryClient, QualityPolicy, ReviewVerifier, SynchronizationConsumer,
    SynchronizationRequest,
};
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting book-sync CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match &cli.command {
        Command::Sync { isbn } => {
            let repository = JsonFileRepository::new(&cli.catalog_path);
            let client = OpenLibraryClient::new(&cli.metadata_endpoint);
            let consumer = SynchronizationConsumer::new(repository, client);

            match consumer
                .consume(SynchronizationRequest::new(isbn.clone()))
                .await
            {
                Ok(()) => {
                    tracing::info!("Synchronization request for {} processed", isbn);
                    println!("Processed synchronization request for {}", isbn);
                }
                Err(e) => {
                    tracing::error!(
                        "Synchronization failed: {} (retryable: {})",
                        e,
                        e.is_retryable()
                    );
                    eprintln!("{}", e);
                    // 75 = EX_TEMPFAIL, so wrappers can redeliver on retryable failures
                    std::process::exit(if e.is_retryable() { 75 } else { 1 });
                }
            }
        }
        Command::Verify { text } => {
            let policy = match &cli.policy_file {
                Some(path) => QualityPolicy::from_toml_path(Path::new(path))?,
                None => QualityPolicy::default(),
            };
            let verifier = ReviewVerifier::from_policy(&policy);

            if verifier.meets_quality_standards(text) {
                println!("Review meets quality standards");
            } else {
                println!("Review rejected");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
