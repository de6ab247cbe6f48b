//! Reference numbers and their allocator.
//!
//! The canonical text of a reference is `GG-LEGAL-YYYY-NNNN`: a fixed prefix,
//! the four-digit year the reference was allocated in, and a sequence number
//! zero-padded to four digits. Once the counter passes 9999 the sequence is
//! simply written wider.
//!
//! The sequence counter never restarts at a year boundary. A reference minted
//! in January after `GG-LEGAL-2024-0041` is `GG-LEGAL-2025-0042`.

use std::{fmt, str::FromStr, sync::OnceLock};

use chrono::Datelike as _;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
  Error,
  clock::{Clock, SystemClock},
};

/// The literal token every reference starts with.
pub const PREFIX: &str = "GG-LEGAL";

static REFERENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn reference_pattern() -> &'static Regex {
  REFERENCE_PATTERN.get_or_init(|| {
    let pattern = format!(r"{}-([0-9]{{4}})-([0-9]{{4,}})", regex::escape(PREFIX));
    Regex::new(&pattern).expect("reference pattern is a valid regex")
  })
}

// ─── ReferenceNumber ─────────────────────────────────────────────────────────

/// A parsed reference number.
///
/// Serialises as its canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceNumber {
  pub year:     i32,
  pub sequence: u32,
}

impl ReferenceNumber {
  pub fn new(year: i32, sequence: u32) -> Self { Self { year, sequence } }

  pub fn prefix(&self) -> &'static str { PREFIX }
}

impl fmt::Display for ReferenceNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{PREFIX}-{:04}-{:04}", self.year, self.sequence)
  }
}

/// Accepts only the exact canonical text; use [`extract`] to search free
/// text.
impl FromStr for ReferenceNumber {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    extract(s)
      .filter(|r| format(r) == s)
      .ok_or_else(|| Error::MalformedReference(s.to_owned()))
  }
}

impl TryFrom<String> for ReferenceNumber {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<ReferenceNumber> for String {
  fn from(value: ReferenceNumber) -> Self { value.to_string() }
}

// ─── Text conventions ────────────────────────────────────────────────────────

/// Find the leftmost canonical reference embedded in `text`.
///
/// Matching is case-sensitive on the prefix and requires exactly four digits
/// for the year and at least four for the sequence. The sequence takes the
/// whole digit run, so `GG-LEGAL-2025-10000` is never cut to `...-1000`.
/// A digit run too long for a sequence is skipped.
pub fn extract(text: &str) -> Option<ReferenceNumber> {
  reference_pattern().captures_iter(text).find_map(|caps| {
    let year = caps.get(1)?.as_str().parse().ok()?;
    let sequence = caps.get(2)?.as_str().parse().ok()?;
    Some(ReferenceNumber { year, sequence })
  })
}

/// Render the canonical text of `reference`.
///
/// Inverse of [`extract`] for every value `extract` can produce, including
/// sequences past 9999.
pub fn format(reference: &ReferenceNumber) -> String { reference.to_string() }

// ─── Allocator ───────────────────────────────────────────────────────────────

/// Mints new reference numbers from a strictly increasing counter.
///
/// The counter starts at 1 and is only ever incremented, except by
/// [`ReferenceAllocator::reset`]. Not synchronised: wrap the owner in a lock
/// when sharing it between threads.
#[derive(Debug, Clone)]
pub struct ReferenceAllocator<C = SystemClock> {
  next_sequence: u32,
  clock:         C,
}

impl Default for ReferenceAllocator<SystemClock> {
  fn default() -> Self { Self::new(SystemClock) }
}

impl<C: Clock> ReferenceAllocator<C> {
  pub fn new(clock: C) -> Self {
    Self {
      next_sequence: 1,
      clock,
    }
  }

  /// Mint the next reference, stamped with the current calendar year.
  pub fn allocate(&mut self) -> ReferenceNumber {
    let reference = self.peek();
    self.next_sequence = self.next_sequence.saturating_add(1);
    tracing::debug!(%reference, "allocated reference number");
    reference
  }

  /// The reference the next [`allocate`](Self::allocate) call would return,
  /// if the year does not roll over in between.
  pub fn peek(&self) -> ReferenceNumber {
    ReferenceNumber {
      year:     self.clock.now().year(),
      sequence: self.next_sequence,
    }
  }

  pub fn next_sequence(&self) -> u32 { self.next_sequence }

  /// Rewind the counter to 1. Only meaningful alongside clearing the store.
  pub fn reset(&mut self) { self.next_sequence = 1; }

  /// See [`extract`].
  pub fn extract(text: &str) -> Option<ReferenceNumber> { extract(text) }

  /// See [`format`].
  pub fn format(reference: &ReferenceNumber) -> String { format(reference) }
}
