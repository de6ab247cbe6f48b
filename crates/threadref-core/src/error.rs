//! Error types for `threadref-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed reference number: {0:?}")]
  MalformedReference(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
