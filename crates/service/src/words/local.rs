//! Blob-backed word store.
//!
//! The whole collection lives as one JSON array under a single key, so every
//! mutation is a read-modify-write of the full blob and costs O(n) in the
//! collection size. That is the intended scaling limit for a small personal
//! vocabulary, not something to optimise here.
//!
//! Mutations through one `LocalBlobStore` are serialised by an internal lock.
//! Two independent handles (or processes) over the same substrate still race
//! and the last full-blob write wins.

use std::sync::Arc;

use async_trait::async_trait;
use models::{Word, WordId, WordPatch};
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::{Operation, WordError};
use crate::storage::BlobStore;
use crate::words::store::WordStore;

pub const DEFAULT_KEY: &str = "vocabulary_words";

pub struct LocalBlobStore<B: BlobStore + ?Sized> {
    blob: Arc<B>,
    key: String,
    write_lock: Mutex<()>,
}

impl<B: BlobStore + ?Sized> LocalBlobStore<B> {
    pub fn new(blob: Arc<B>, key: impl Into<String>) -> Self {
        Self { blob, key: key.into(), write_lock: Mutex::new(()) }
    }

    /// Store under [`DEFAULT_KEY`].
    pub fn with_default_key(blob: Arc<B>) -> Self { Self::new(blob, DEFAULT_KEY) }

    pub fn key(&self) -> &str { &self.key }

    /// Absent blob reads as an empty collection; an unreadable one is an error.
    async fn read(&self, op: Operation, id: Option<&WordId>) -> Result<Vec<Word>, WordError> {
        let raw = self
            .blob
            .get(&self.key)
            .await
            .map_err(|e| WordError::persistence(op, id, e))?;
        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| WordError::persistence(op, id, format!("corrupt blob under {:?}: {e}", self.key))),
        }
    }

    async fn write(&self, op: Operation, id: Option<&WordId>, words: &[Word]) -> Result<(), WordError> {
        let data = serde_json::to_string(words).map_err(|e| WordError::persistence(op, id, e))?;
        self.blob
            .set(&self.key, &data)
            .await
            .map_err(|e| WordError::persistence(op, id, e))?;
        debug!(key = %self.key, count = words.len(), bytes = data.len(), "blob_rewritten");
        Ok(())
    }
}

#[async_trait]
impl<B: BlobStore + ?Sized> WordStore for LocalBlobStore<B> {
    fn substrate(&self) -> &'static str { "local_blob" }

    async fn insert(&self, word: Word) -> Result<Word, WordError> {
        let _guard = self.write_lock.lock().await;
        let mut words = self.read(Operation::Add, Some(&word.id)).await?;
        if words.iter().any(|w| w.id == word.id) {
            return Err(WordError::persistence(Operation::Add, Some(&word.id), "id already present in collection"));
        }
        words.push(word.clone());
        self.write(Operation::Add, Some(&word.id), &words).await?;
        Ok(word)
    }

    async fn list(&self) -> Result<Vec<Word>, WordError> {
        let mut words = self.read(Operation::List, None).await?;
        // Stable sort over reversed storage order: equal timestamps list the later-stored word first.
        words.reverse();
        words.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(words)
    }

    async fn update(&self, id: &WordId, patch: &WordPatch) -> Result<Word, WordError> {
        let _guard = self.write_lock.lock().await;
        let mut words = self.read(Operation::Update, Some(id)).await?;
        let Some(idx) = words.iter().position(|w| &w.id == id) else {
            return Err(WordError::not_found(Operation::Update, id));
        };
        patch.apply_to(&mut words[idx]);
        let updated = words[idx].clone();
        self.write(Operation::Update, Some(id), &words).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &WordId) -> Result<(), WordError> {
        let _guard = self.write_lock.lock().await;
        let mut words = self.read(Operation::Delete, Some(id)).await?;
        if !words.iter().any(|w| &w.id == id) {
            return Err(WordError::not_found(Operation::Delete, id));
        }
        let before = words.len();
        words.retain(|w| &w.id != id);
        if words.len() >= before {
            return Err(WordError::persistence(Operation::Delete, Some(id), "delete did not reduce collection size"));
        }
        self.write(Operation::Delete, Some(id), &words).await
    }

    async fn delete_all(&self) -> Result<(), WordError> {
        let _guard = self.write_lock.lock().await;
        self.blob
            .remove(&self.key)
            .await
            .map_err(|e| WordError::persistence(Operation::DeleteAll, None, e))
    }
}
