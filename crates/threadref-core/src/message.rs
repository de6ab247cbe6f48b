//! Message records — the unit stored by a [`ThreadStore`](crate::store::ThreadStore).
//!
//! A message is immutable once appended. Its thread position is fixed at
//! insertion time and never recomputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Filing ──────────────────────────────────────────────────────────────────

/// Input to [`crate::session::Session::file_message`].
///
/// The reference, subject rewrite, id, and timestamp are all resolved by the
/// session; callers only supply what the user composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filing {
  pub sender:    String,
  pub recipient: String,
  pub subject:   String,
  pub body:      String,
  /// A reference chosen by the caller, normally one of the session's
  /// existing references. Taken as-is, without validation.
  #[serde(default)]
  pub reference: Option<String>,
}

impl Filing {
  /// A filing with no explicit reference.
  pub fn new(
    sender: impl Into<String>,
    recipient: impl Into<String>,
    subject: impl Into<String>,
    body: impl Into<String>,
  ) -> Self {
    Self {
      sender:    sender.into(),
      recipient: recipient.into(),
      subject:   subject.into(),
      body:      body.into(),
      reference: None,
    }
  }

  /// File into the thread identified by `reference`.
  pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
    self.reference = Some(reference.into());
    self
  }
}

// ─── NewMessage ──────────────────────────────────────────────────────────────

/// A fully resolved message that has not yet been given a thread position.
/// Input to [`crate::store::ThreadStore::append`].
#[derive(Debug, Clone)]
pub struct NewMessage {
  pub id:        Uuid,
  pub timestamp: DateTime<Utc>,
  pub sender:    String,
  pub recipient: String,
  /// Already rewritten to contain `reference`.
  pub subject:   String,
  pub body:      String,
  pub reference: String,
}

impl NewMessage {
  /// Finalise with the position the store computed.
  pub fn into_message(self, thread_position: u32) -> Message {
    Message {
      id: self.id,
      timestamp: self.timestamp,
      sender: self.sender,
      recipient: self.recipient,
      subject: self.subject,
      body: self.body,
      reference: self.reference,
      thread_position,
    }
  }
}

// ─── Message ─────────────────────────────────────────────────────────────────

/// One filed email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub id:              Uuid,
  /// Filing time; orders messages within a thread.
  pub timestamp:       DateTime<Utc>,
  pub sender:          String,
  pub recipient:       String,
  pub subject:         String,
  /// Opaque; never parsed.
  pub body:            String,
  /// Canonical text of the thread's reference.
  pub reference:       String,
  /// 1-based ordinal within the thread.
  pub thread_position: u32,
}
