//! Domain view of a vocabulary entry, independent of the substrate holding it.
//!
//! These types are what the blob substrate serializes and what every store
//! hands back to callers. The relational row lives in [`crate::word`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, store-generated identifier of a [`Word`].
///
/// Freshly generated ids only use the characters `[0-9a-z]`. Blobs written by
/// older clients may carry a numeric id; it is read back as its decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn into_inner(self) -> String { self.0 }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for WordId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for WordId {
    fn from(s: String) -> Self { Self(s) }
}

impl<'de> Deserialize<'de> for WordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => WordId(s),
            RawId::Number(n) => WordId(n.to_string()),
        })
    }
}

/// A persisted term/translation pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    #[serde(alias = "english", alias = "word")]
    pub term: String,
    #[serde(alias = "portuguese")]
    pub translation: String,
    pub created_at: DateTime<Utc>,
}

/// Caller input for creating a word; id and timestamp are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub term: String,
    pub translation: String,
}

impl NewWord {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self { term: term.into(), translation: translation.into() }
    }
}

/// Partial update. Only `term` and `translation` can change; any `id` or
/// `created_at` present in a deserialized payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl WordPatch {
    pub fn term(term: impl Into<String>) -> Self {
        Self { term: Some(term.into()), translation: None }
    }

    pub fn translation(translation: impl Into<String>) -> Self {
        Self { term: None, translation: Some(translation.into()) }
    }

    pub fn is_empty(&self) -> bool { self.term.is_none() && self.translation.is_none() }

    /// Overwrite the mutable fields of `word` with whatever this patch carries.
    pub fn apply_to(&self, word: &mut Word) {
        if let Some(term) = &self.term {
            word.term.clone_from(term);
        }
        if let Some(translation) = &self.translation {
            word.translation.clone_from(translation);
        }
    }
}
