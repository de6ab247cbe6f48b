//! [`MemoryStore`] — the in-memory implementation of [`ThreadStore`].

use std::collections::HashSet;

use threadref_core::{
  message::{Message, NewMessage},
  store::ThreadStore,
};

/// A thread store backed by a single append-only `Vec`.
///
/// Insertion order is preserved and doubles as the tie-break for messages
/// filed at the same instant.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  messages: Vec<Message>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Every stored message in insertion order.
  pub fn messages(&self) -> &[Message] { &self.messages }

  fn count_in_thread(&self, reference: &str) -> usize {
    self
      .messages
      .iter()
      .filter(|m| m.reference == reference)
      .count()
  }
}

impl ThreadStore for MemoryStore {
  fn append(&mut self, message: NewMessage) -> Message {
    let prior = self.count_in_thread(&message.reference);
    let position = u32::try_from(prior + 1).unwrap_or(u32::MAX);
    let message = message.into_message(position);

    tracing::trace!(id = %message.id, position, "appending message");
    self.messages.push(message.clone());
    message
  }

  fn by_reference(&self, reference: &str) -> Vec<Message> {
    let mut thread: Vec<Message> = self
      .messages
      .iter()
      .filter(|m| m.reference == reference)
      .cloned()
      .collect();
    // Stable sort keeps insertion order for equal timestamps.
    thread.sort_by_key(|m| m.timestamp);
    thread
  }

  fn unique_references(&self) -> HashSet<String> {
    self.messages.iter().map(|m| m.reference.clone()).collect()
  }

  fn len(&self) -> usize { self.messages.len() }

  fn reset(&mut self) { self.messages.clear(); }
}
