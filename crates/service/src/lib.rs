//! Service layer for the vocabulary store.
//! - `words`: the store contract, both substrate adapters, and the facade.
//! - `storage`: local key-value substrates used by the blob adapter.
//! - `runtime`: config-driven wiring for binaries.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod words;
#[cfg(test)]
pub mod test_support;
#[cfg(test)]
pub mod testing;

pub use errors::{ErrorKind, Operation, WordError};
