//! Word vocabulary: one store contract, two interchangeable substrates.
//!
//! - [`store::WordStore`] is the persistence contract.
//! - [`local::LocalBlobStore`] keeps the whole collection as one JSON blob.
//! - [`remote::RemoteTableStore`] keeps one row per word in a relational table.
//! - [`service::WordService`] is the facade callers use; it owns id generation.

pub mod id;
pub mod local;
pub mod remote;
pub mod seed;
pub mod service;
pub mod store;

pub use id::WordIdGenerator;
pub use local::LocalBlobStore;
pub use remote::RemoteTableStore;
pub use service::WordService;
pub use store::WordStore;
