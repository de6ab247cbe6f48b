//! [`Session`] — the single entry point for filing and reading messages.
//!
//! A session owns one allocator and one store. It is created when a user
//! session (or server process) starts and dropped when it ends; there is no
//! process-wide instance.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  clock::{Clock, SystemClock},
  message::{Filing, Message, NewMessage},
  reference::{self, ReferenceAllocator, ReferenceNumber},
  store::ThreadStore,
  subject::inject_reference,
};

/// Where a filed message's reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSource {
  /// Supplied by the caller.
  Explicit,
  /// Found embedded in the subject.
  Extracted,
  /// Newly minted by the allocator.
  Allocated,
}

/// Summary counters for display alongside the thread list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
  pub total_messages: usize,
  pub active_threads: usize,
  /// What the next newly allocated reference will be.
  pub next_reference: ReferenceNumber,
}

/// An allocator and a store, operated as one unit.
///
/// Every method completes synchronously. Mutating methods take `&mut self`,
/// so sharing a session between threads means putting it behind a lock,
/// which in turn makes each [`file_message`](Self::file_message) call a
/// single critical section.
#[derive(Debug)]
pub struct Session<S, C = SystemClock> {
  allocator:      ReferenceAllocator<C>,
  store:          S,
  clock:          C,
  /// Timestamp of the most recently filed message.
  last_timestamp: Option<DateTime<Utc>>,
}

impl<S: ThreadStore> Session<S, SystemClock> {
  pub fn new(store: S) -> Self { Self::with_clock(store, SystemClock) }
}

impl<S: ThreadStore, C: Clock + Clone> Session<S, C> {
  pub fn with_clock(store: S, clock: C) -> Self {
    Self {
      allocator: ReferenceAllocator::new(clock.clone()),
      store,
      clock,
      last_timestamp: None,
    }
  }

  /// File a composed message and return it as stored.
  ///
  /// The reference is resolved in priority order: the explicit reference,
  /// then the first reference embedded in the subject, then a newly
  /// allocated one. The subject is then rewritten to contain it.
  pub fn file_message(&mut self, filing: Filing) -> Message {
    let Filing {
      sender,
      recipient,
      subject,
      body,
      reference,
    } = filing;

    let (reference, source) = self.resolve_reference(reference, &subject);
    let subject = inject_reference(&subject, &reference);
    let timestamp = self.next_timestamp();

    let message = self.store.append(NewMessage {
      id: Uuid::new_v4(),
      timestamp,
      sender,
      recipient,
      subject,
      body,
      reference,
    });

    tracing::debug!(
      id = %message.id,
      reference = %message.reference,
      position = message.thread_position,
      ?source,
      "filed message"
    );
    message
  }

  /// The clock reading, held back from going below the previous filing so
  /// that timestamp order always agrees with thread position.
  fn next_timestamp(&mut self) -> DateTime<Utc> {
    let now = self.clock.now();
    let stamp = self.last_timestamp.map_or(now, |last| now.max(last));
    self.last_timestamp = Some(stamp);
    stamp
  }

  fn resolve_reference(
    &mut self,
    explicit: Option<String>,
    subject: &str,
  ) -> (String, ReferenceSource) {
    // An empty explicit reference counts as none.
    if let Some(explicit) = explicit.filter(|r| !r.is_empty()) {
      return (explicit, ReferenceSource::Explicit);
    }
    if let Some(found) = reference::extract(subject) {
      return (found.to_string(), ReferenceSource::Extracted);
    }
    (self.allocator.allocate().to_string(), ReferenceSource::Allocated)
  }

  /// The thread for `reference`, oldest first.
  pub fn by_reference(&self, reference: &str) -> Vec<Message> {
    self.store.by_reference(reference)
  }

  pub fn unique_references(&self) -> HashSet<String> {
    self.store.unique_references()
  }

  /// [`unique_references`](Self::unique_references) in ascending order, for
  /// listing threads.
  pub fn sorted_references(&self) -> Vec<String> {
    let mut references: Vec<_> = self.unique_references().into_iter().collect();
    references.sort();
    references
  }

  /// Preview of the next allocated reference; does not consume it.
  pub fn next_reference(&self) -> ReferenceNumber { self.allocator.peek() }

  pub fn stats(&self) -> SessionStats {
    SessionStats {
      total_messages: self.store.len(),
      active_threads: self.unique_references().len(),
      next_reference: self.next_reference(),
    }
  }

  /// Clear every message and rewind the reference counter to 1.
  pub fn reset(&mut self) {
    let discarded = self.store.len();
    self.store.reset();
    self.allocator.reset();
    self.last_timestamp = None;
    tracing::info!(discarded, "session reset");
  }

  pub fn store(&self) -> &S { &self.store }
}
