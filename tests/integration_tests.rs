use book_sync::{
    BookRepository, JsonFileRepository, OpenLibraryClient, SyncError, SynchronizationConsumer,
    SynchronizationRequest,
};
use httpmock::prelude::*;
use tempfile::TempDir;

const ISBN: &str = "9780596004651";

#[tokio::test]
async fn test_end_to_end_sync_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/isbn/{}.json", ISBN));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "title": "Head First Java",
                "by_statement": "Kathy Sierra, Bert Bates",
                "number_of_pages": 619,
                "description": {"type": "/type/text", "value": "A brain-friendly guide"}
            }));
    });

    let repository = JsonFileRepository::new(&catalog_path);
    let client = OpenLibraryClient::new(server.base_url());
    let consumer = SynchronizationConsumer::new(repository, client);

    let result = consumer.consume(SynchronizationRequest::new(ISBN)).await;

    assert!(result.is_ok());
    api_mock.assert();
    assert!(catalog_path.exists());

    // Fresh repository over the same file sees the stored record.
    let reader = JsonFileRepository::new(&catalog_path);
    let stored = reader.find_by_isbn(ISBN).await.unwrap().unwrap();
    assert_eq!(stored.title, "Head First Java");
    assert_eq!(stored.author.as_deref(), Some("Kathy Sierra, Bert Bates"));
    assert_eq!(stored.pages, Some(619));
    assert_eq!(stored.description.as_deref(), Some("A brain-friendly guide"));
    assert_eq!(stored.id, Some(1));
}

#[tokio::test]
async fn test_redelivery_of_same_isbn_fetches_only_once() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/isbn/{}.json", ISBN));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"title": "Head First Java"}));
    });

    let repository = JsonFileRepository::new(&catalog_path);
    let client = OpenLibraryClient::new(server.base_url());
    let consumer = SynchronizationConsumer::new(repository, client);

    consumer
        .consume(SynchronizationRequest::new(ISBN))
        .await
        .unwrap();
    consumer
        .consume(SynchronizationRequest::new(ISBN))
        .await
        .unwrap();

    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_unknown_isbn_surfaces_retryable_failure() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/isbn/{}.json", ISBN));
        then.status(404);
    });

    let repository = JsonFileRepository::new(&catalog_path);
    let client = OpenLibraryClient::new(server.base_url());
    let consumer = SynchronizationConsumer::new(repository, client);

    let result = consumer.consume(SynchronizationRequest::new(ISBN)).await;

    let err = result.unwrap_err();
    assert!(matches!(err, SyncError::MetadataUnavailableError { .. }));
    assert!(err.is_retryable());
    api_mock.assert();

    let reader = JsonFileRepository::new(&catalog_path);
    assert!(reader.find_by_isbn(ISBN).await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_isbn_never_reaches_the_upstream_api() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"title": "Should never be fetched"}));
    });

    let repository = JsonFileRepository::new(&catalog_path);
    let client = OpenLibraryClient::new(server.base_url());
    let consumer = SynchronizationConsumer::new(repository, client);

    let result = consumer.consume(SynchronizationRequest::new("42")).await;

    assert!(result.is_ok());
    api_mock.assert_hits(0);
    assert!(!catalog_path.exists());
}

#[tokio::test]
async fn test_upstream_payload_without_title_is_unavailable_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/isbn/{}.json", ISBN));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"number_of_pages": 619}));
    });

    let repository = JsonFileRepository::new(&catalog_path);
    let client = OpenLibraryClient::new(server.base_url());
    let consumer = SynchronizationConsumer::new(repository, client);

    let result = consumer.consume(SynchronizationRequest::new(ISBN)).await;

    assert!(matches!(
        result,
        Err(SyncError::MetadataUnavailableError { .. })
    ));
}
