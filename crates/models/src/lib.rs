pub mod db;
pub mod domain;
pub mod word;

pub use domain::{NewWord, Word, WordId, WordPatch};
