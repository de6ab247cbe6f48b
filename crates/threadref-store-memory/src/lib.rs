//! In-memory backend for threadref.
//!
//! Messages live for as long as the owning session; nothing is persisted.

mod store;

pub use store::MemoryStore;
