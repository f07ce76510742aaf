pub mod consumer;
pub mod rules;
pub mod verifier;

pub use crate::domain::model::{Book, Isbn, SynchronizationRequest};
pub use crate::domain::ports::{BookRepository, MetadataClient};
pub use crate::utils::error::Result;
