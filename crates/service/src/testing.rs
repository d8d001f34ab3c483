//! Behavior every word substrate must share.
//!
//! Run [`run_store_conformance`] against a service wrapping a dedicated store;
//! it clears the collection between checks.

use std::collections::HashSet;

use models::{NewWord, WordId, WordPatch};

use crate::errors::{ErrorKind, WordError};
use crate::words::{WordService, WordStore};

pub async fn run_store_conformance<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    add_then_list_round_trip(svc).await?;
    rapid_adds_get_distinct_ids(svc).await?;
    newest_first(svc).await?;
    update_touches_only_patched_fields(svc).await?;
    empty_patch_is_a_lookup(svc).await?;
    missing_ids_are_not_found(svc).await?;
    delete_removes_exactly_one(svc).await?;
    duplicate_terms_allowed(svc).await?;
    delete_all_is_idempotent(svc).await?;
    Ok(())
}

async fn add_then_list_round_trip<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    let added = svc.add_word(NewWord::new("Hello", "Olá")).await?;
    assert!(!added.id.as_str().is_empty());

    let words = svc.get_words().await?;
    let matching: Vec<_> = words.iter().filter(|w| w.term == "Hello" && w.translation == "Olá").collect();
    assert_eq!(matching.len(), 1, "exactly one matching word after add");
    assert_eq!(matching[0].id, added.id);
    assert_eq!(matching[0].created_at, added.created_at);
    Ok(())
}

async fn rapid_adds_get_distinct_ids<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    const N: usize = 50;
    let mut ids = HashSet::new();
    for i in 0..N {
        ids.insert(svc.add_word(NewWord::new(format!("w{i}"), "x")).await?.id);
    }
    assert_eq!(ids.len(), N, "every add yields a new id");
    let listed: HashSet<WordId> = svc.get_words().await?.into_iter().map(|w| w.id).collect();
    assert_eq!(listed, ids);
    Ok(())
}

async fn newest_first<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    let first = svc.add_word(NewWord::new("first", "primeiro")).await?;
    let second = svc.add_word(NewWord::new("second", "segundo")).await?;
    let third = svc.add_word(NewWord::new("third", "terceiro")).await?;

    let words = svc.get_words().await?;
    let ids: Vec<_> = words.iter().map(|w| w.id.clone()).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id], "later insert listed first");
    assert!(words.windows(2).all(|p| p[0].created_at >= p[1].created_at));
    Ok(())
}

async fn update_touches_only_patched_fields<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    let original = svc.add_word(NewWord::new("Hello", "Olá")).await?;

    let updated = svc.update_word(&original.id, WordPatch::term("X")).await?;
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.term, "X");
    assert_eq!(updated.translation, "Olá");

    let listed = svc.get_words().await?;
    assert_eq!(listed, vec![updated]);
    Ok(())
}

async fn empty_patch_is_a_lookup<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    let original = svc.add_word(NewWord::new("World", "Mundo")).await?;
    let same = svc.update_word(&original.id, WordPatch::default()).await?;
    assert_eq!(same, original);
    Ok(())
}

async fn missing_ids_are_not_found<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    svc.add_word(NewWord::new("kept", "mantido")).await?;
    let ghost = WordId::new("00000000000ghost");

    let err = svc.update_word(&ghost, WordPatch::term("X")).await.expect_err("update of missing id");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.word_id(), Some(&ghost));

    let err = svc.update_word(&ghost, WordPatch::default()).await.expect_err("empty patch of missing id");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = svc.delete_word(&ghost).await.expect_err("delete of missing id");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(svc.get_words().await?.len(), 1, "failed calls change nothing");
    Ok(())
}

async fn delete_removes_exactly_one<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    let a = svc.add_word(NewWord::new("a", "a")).await?;
    let b = svc.add_word(NewWord::new("b", "b")).await?;

    svc.delete_word(&a.id).await?;
    let remaining = svc.get_words().await?;
    assert_eq!(remaining, vec![b]);

    let err = svc.delete_word(&a.id).await.expect_err("second delete");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

async fn duplicate_terms_allowed<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.delete_all_words().await?;
    let one = svc.add_word(NewWord::new("bank", "banco")).await?;
    let two = svc.add_word(NewWord::new("bank", "margem")).await?;
    assert_ne!(one.id, two.id);
    assert_eq!(svc.get_words().await?.len(), 2);
    Ok(())
}

async fn delete_all_is_idempotent<S: WordStore + ?Sized>(svc: &WordService<S>) -> Result<(), WordError> {
    svc.add_word(NewWord::new("temp", "temp")).await?;
    svc.delete_all_words().await?;
    assert!(svc.get_words().await?.is_empty());
    svc.delete_all_words().await?;
    assert!(svc.get_words().await?.is_empty());
    Ok(())
}
