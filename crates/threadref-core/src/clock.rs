//! Time source for reference years and message timestamps.

use std::sync::{
  Arc,
  atomic::{AtomicI64, Ordering},
};

use chrono::{DateTime, Duration, Utc};

/// Supplies the current instant.
///
/// The allocator reads the calendar year from it and the session stamps each
/// filed message with it.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can hold one handle while the
/// session holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
  micros: Arc<AtomicI64>,
}

impl ManualClock {
  pub fn new(at: DateTime<Utc>) -> Self {
    Self {
      micros: Arc::new(AtomicI64::new(at.timestamp_micros())),
    }
  }

  pub fn set(&self, at: DateTime<Utc>) {
    self.micros.store(at.timestamp_micros(), Ordering::SeqCst);
  }

  pub fn advance(&self, by: Duration) {
    let step = by.num_microseconds().unwrap_or(i64::MAX);
    self.micros.fetch_add(step, Ordering::SeqCst);
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(self.micros.load(Ordering::SeqCst))
      .unwrap_or_default()
  }
}
