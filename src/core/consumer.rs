use crate::domain::model::{Book, Isbn, SynchronizationRequest};
use crate::domain::ports::{BookRepository, MetadataClient};
use crate::utils::error::Result;

/// Consumes synchronization requests delivered by the queue collaborator and
/// makes sure the catalog holds metadata for the requested ISBN.
///
/// Two distinct outcome channels, kept deliberately separate:
/// - malformed ISBNs are dropped without error (poison messages must not loop),
/// - collaborator failures propagate unmodified so the transport can redeliver.
pub struct SynchronizationConsumer<R, M> {
    repository: R,
    metadata_client: M,
}

impl<R: BookRepository, M: MetadataClient> SynchronizationConsumer<R, M> {
    pub fn new(repository: R, metadata_client: M) -> Self {
        Self {
            repository,
            metadata_client,
        }
    }

    /// Processes one request: validate, skip if already cataloged, otherwise
    /// fetch metadata once and store the record. Stateless across calls; the
    /// lookup-then-save sequence is not locked here, uniqueness per ISBN is
    /// the repository's contract.
    pub async fn consume(&self, request: SynchronizationRequest) -> Result<()> {
        let Some(isbn) = Isbn::parse(&request.isbn) else {
            tracing::warn!(
                "Discarding synchronization request with malformed ISBN: {:?}",
                request.isbn
            );
            return Ok(());
        };

        if self.repository.find_by_isbn(isbn.as_str()).await?.is_some() {
            tracing::debug!("Book {} already in catalog, skipping", isbn);
            return Ok(());
        }

        let book: Book = self
            .metadata_client
            .fetch_metadata_for_isbn(isbn.as_str())
            .await?;
        let saved = self.repository.save(book).await?;

        tracing::info!("Stored book {} ({:?})", isbn, saved.title);
        Ok(())
    }
}
