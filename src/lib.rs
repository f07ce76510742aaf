pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{JsonFileRepository, OpenLibraryClient};
pub use config::{Cli, QualityPolicy};
pub use core::consumer::SynchronizationConsumer;
pub use core::verifier::ReviewVerifier;
pub use domain::model::{Book, Isbn, SynchronizationRequest};
pub use domain::ports::{BookRepository, MetadataClient};
pub use utils::error::{Result, SyncError};
