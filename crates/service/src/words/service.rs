use std::sync::Arc;

use models::{NewWord, Word, WordId, WordPatch};
use tracing::{debug, info, instrument, warn};

use crate::errors::{ErrorKind, WordError};
use crate::words::id::WordIdGenerator;
use crate::words::store::WordStore;

/// Facade over a [`WordStore`]: assigns ids and timestamps, logs every
/// operation, and leaves persistence to whichever substrate it was built with.
pub struct WordService<S: WordStore + ?Sized = dyn WordStore> {
    store: Arc<S>,
    ids: &'static WordIdGenerator,
}

impl<S: WordStore + ?Sized> Clone for WordService<S> {
    fn clone(&self) -> Self { Self { store: self.store.clone(), ids: self.ids } }
}

impl<S: WordStore + ?Sized> WordService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store, ids: WordIdGenerator::global() } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    /// Create and persist a word.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::storage::MemoryBlobStore;
    /// use service::words::{LocalBlobStore, WordService};
    /// use models::NewWord;
    ///
    /// let svc = WordService::new(Arc::new(LocalBlobStore::with_default_key(Arc::new(MemoryBlobStore::new()))));
    /// let word = tokio_test::block_on(svc.add_word(NewWord::new("Hello", "Olá"))).unwrap();
    /// assert_eq!(word.term, "Hello");
    /// assert!(!word.id.as_str().is_empty());
    /// ```
    #[instrument(skip(self, input), fields(substrate = self.store.substrate()))]
    pub async fn add_word(&self, input: NewWord) -> Result<Word, WordError> {
        let (id, created_at) = self.ids.next();
        let word = Word { id, term: input.term, translation: input.translation, created_at };
        let stored = self.store.insert(word).await?;
        info!(word_id = %stored.id, term = %stored.term, "word_added");
        Ok(stored)
    }

    /// All words, newest first.
    #[instrument(skip(self), fields(substrate = self.store.substrate()))]
    pub async fn get_words(&self) -> Result<Vec<Word>, WordError> {
        let words = self.store.list().await?;
        debug!(count = words.len(), "words_listed");
        Ok(words)
    }

    /// Change `term` and/or `translation`; `id` and `created_at` never change.
    #[instrument(skip(self, id, patch), fields(substrate = self.store.substrate(), word_id = %id))]
    pub async fn update_word(&self, id: &WordId, patch: WordPatch) -> Result<Word, WordError> {
        let updated = self.store.update(id, &patch).await.inspect_err(log_not_found)?;
        info!(word_id = %updated.id, "word_updated");
        Ok(updated)
    }

    #[instrument(skip(self, id), fields(substrate = self.store.substrate(), word_id = %id))]
    pub async fn delete_word(&self, id: &WordId) -> Result<(), WordError> {
        self.store.delete(id).await.inspect_err(log_not_found)?;
        info!(word_id = %id, "word_deleted");
        Ok(())
    }

    /// Remove every word; an empty collection is not an error.
    #[instrument(skip(self), fields(substrate = self.store.substrate()))]
    pub async fn delete_all_words(&self) -> Result<(), WordError> {
        self.store.delete_all().await?;
        info!("words_cleared");
        Ok(())
    }
}

// Persistence errors are logged where they are raised.
fn log_not_found(err: &WordError) {
    if err.kind() == ErrorKind::NotFound {
        warn!(operation = %err.operation(), error = %err, "word_not_found");
    }
}
