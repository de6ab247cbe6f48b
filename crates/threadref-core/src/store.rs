//! The `ThreadStore` trait.
//!
//! Implemented by storage backends (e.g. `threadref-store-memory`). The
//! session and the API depend on this abstraction, not on a concrete backend.

use std::collections::HashSet;

use crate::message::{Message, NewMessage};

/// An append-only collection of messages, grouped into threads by reference.
///
/// A store knows nothing about how references are minted; it compares them as
/// opaque strings. There is no update or delete of individual messages.
pub trait ThreadStore: Send {
  /// Store `message` with `thread_position` set to one more than the number
  /// of messages already stored under the same reference.
  fn append(&mut self, message: NewMessage) -> Message;

  /// All messages filed under `reference`, ascending by timestamp. Messages
  /// with equal timestamps keep insertion order. Unknown references yield an
  /// empty vector.
  fn by_reference(&self, reference: &str) -> Vec<Message>;

  /// Every distinct reference in the store, in no particular order.
  fn unique_references(&self) -> HashSet<String>;

  /// Total number of stored messages across all threads.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool { self.len() == 0 }

  /// Discard every stored message.
  fn reset(&mut self);
}
