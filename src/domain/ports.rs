use crate::domain::model::Book;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence collaborator. Implementations must guarantee at most one record
/// per ISBN: `save` may fail on a duplicate, and callers propagate that failure
/// so the delivery mechanism can retry.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>>;
    async fn save(&self, book: Book) -> Result<Book>;
}

/// Remote metadata source. Failures (network, unknown ISBN, malformed upstream
/// payload) surface as errors on the retryable channel.
#[async_trait]
pub trait MetadataClient: Send + Sync {
    async fn fetch_metadata_for_isbn(&self, isbn: &str) -> Result<Book>;
}

#[async_trait]
impl<T: BookRepository + ?Sized> BookRepository for Arc<T> {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        (**self).find_by_isbn(isbn).await
    }

    async fn save(&self, book: Book) -> Result<Book> {
        (**self).save(book).await
    }
}

#[async_trait]
impl<T: MetadataClient + ?Sized> MetadataClient for Arc<T> {
    async fn fetch_metadata_for_isbn(&self, isbn: &str) -> Result<Book> {
        (**self).fetch_metadata_for_isbn(isbn).await
    }
}
