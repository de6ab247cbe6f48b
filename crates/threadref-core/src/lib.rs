//! Core types and trait definitions for threadref.
//!
//! Reference numbers correlate threaded email conversations: every filed
//! message carries one, and messages sharing a reference form a thread.
//!
//! This crate is deliberately free of HTTP and runtime dependencies. Storage
//! backends implement [`store::ThreadStore`]; callers drive everything through
//! a [`session::Session`].

pub mod clock;
pub mod error;
pub mod message;
pub mod reference;
pub mod session;
pub mod store;
pub mod subject;

pub use error::{Error, Result};
