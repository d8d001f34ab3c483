//! One-off example data for a fresh installation.

use models::{NewWord, Word};
use tracing::info;

use crate::errors::WordError;
use crate::words::service::WordService;
use crate::words::store::WordStore;

pub fn default_words() -> Vec<NewWord> {
    vec![
        NewWord::new("Hello", "Olá"),
        NewWord::new("World", "Mundo"),
        NewWord::new("Computer", "Computador"),
    ]
}

/// Add every default word through the service, in order.
pub async fn seed<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<Vec<Word>, WordError> {
    let mut added = Vec::new();
    for input in default_words() {
        added.push(svc.add_word(input).await?);
    }
    info!(count = added.len(), "words_seeded");
    Ok(added)
}

/// Seed only if the collection is empty; returns `None` when nothing was done.
pub async fn seed_if_empty<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<Option<Vec<Word>>, WordError> {
    if !svc.get_words().await?.is_empty() {
        info!("seed_skipped_collection_not_empty");
        return Ok(None);
    }
    seed(svc).await.map(Some)
}
