//! Cross-cutting helpers shared by the vocabulary crates and binary.

pub mod env;
pub mod utils;
