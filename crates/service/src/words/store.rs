use async_trait::async_trait;
use models::{Word, WordId, WordPatch};

use crate::errors::WordError;

/// Persistence contract shared by every word substrate.
///
/// Implementations must agree on observable behavior: the same error kinds for
/// the same situations, newest-first listing, and untouched `id`/`created_at`
/// on update. Id and timestamp generation happens above this trait.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Short substrate name for logs.
    fn substrate(&self) -> &'static str;

    /// Persist a fully formed word and return the stored state.
    async fn insert(&self, word: Word) -> Result<Word, WordError>;

    /// All words, `created_at` descending; ties keep a stable order.
    async fn list(&self) -> Result<Vec<Word>, WordError>;

    /// Apply `patch` to the word with `id`; `NotFound` if absent.
    async fn update(&self, id: &WordId, patch: &WordPatch) -> Result<Word, WordError>;

    /// Remove the word with `id`; `NotFound` if absent.
    async fn delete(&self, id: &WordId) -> Result<(), WordError>;

    /// Remove every word. Succeeds on an empty collection.
    async fn delete_all(&self) -> Result<(), WordError>;
}
