use crate::domain::model::Book;
use crate::domain::ports::BookRepository;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Repository backed by a single JSON file keyed by ISBN. All access goes
/// through one mutex, so lookup-then-save is atomic in-process and a duplicate
/// ISBN surfaces as a persistence error rather than an overwrite.
pub struct JsonFileRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, Book>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn store(&self, books: &BTreeMap<String, Book>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(books)?)?;
        Ok(())
    }
}

#[async_trait]
impl BookRepository for JsonFileRepository {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        let _guard = self.lock.lock().await;
        Ok(self.load()?.get(isbn).cloned())
    }

    async fn save(&self, mut book: Book) -> Result<Book> {
        let _guard = self.lock.lock().await;
        let mut books = self.load()?;

        if books.contains_key(&book.isbn) {
            return Err(SyncError::PersistenceError {
                message: format!("duplicate ISBN {}", book.isbn),
            });
        }

        let next_id = books.values().filter_map(|b| b.id).max().unwrap_or(0) + 1;
        book.id = Some(next_id);

        books.insert(book.isbn.clone(), book.clone());
        self.store(&books)?;
        Ok(book)
    }
}
