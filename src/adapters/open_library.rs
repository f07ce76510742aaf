use crate::domain::model::Book;
use crate::domain::ports::MetadataClient;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;

/// Metadata client against the Open Library JSON API
/// (`GET {base}/isbn/{isbn}.json`).
pub struct OpenLibraryClient {
    base_url: String,
    client: Client,
}

impl OpenLibraryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl MetadataClient for OpenLibraryClient {
    async fn fetch_metadata_for_isbn(&self, isbn: &str) -> Result<Book> {
        let url = format!("{}/isbn/{}.json", self.base_url.trim_end_matches('/'), isbn);
        tracing::debug!("Fetching metadata from {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Metadata response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SyncError::MetadataUnavailableError {
                isbn: isbn.to_string(),
                reason: format!("upstream returned {}", response.status()),
            });
        }

        let payload: serde_json::Value = response.json().await?;

        let title = payload
            .get("title")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SyncError::MetadataUnavailableError {
                isbn: isbn.to_string(),
                reason: "response carries no title".to_string(),
            })?
            .to_string();

        Ok(Book {
            id: None,
            isbn: isbn.to_string(),
            title,
            author: payload
                .get("by_statement")
                .and_then(|v| v.as_str())
                .map(String::from),
            pages: payload
                .get("number_of_pages")
                .and_then(|v| v.as_u64())
                .map(|n| n as u32),
            // Open Library serves descriptions both as a plain string and as
            // a typed text object.
            description: payload
                .get("description")
                .and_then(|v| v.as_str().or_else(|| v.get("value").and_then(|t| t.as_str())))
                .map(String::from),
        })
    }
}
