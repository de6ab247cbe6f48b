//! JSON REST API for threadref.
//!
//! Exposes an axum [`Router`] over a shared [`Session`]. Rendering, TLS, and
//! transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", threadref_api::api_router(session.clone()))
//! ```

pub mod error;
pub mod messages;
pub mod references;
pub mod session;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use parking_lot::Mutex;
use threadref_core::{clock::Clock, session::Session, store::ThreadStore};

pub use error::{ApiError, Result};

/// One session shared by every request.
///
/// Each handler holds the lock for its whole operation, so filing a message
/// (resolve, allocate, append) is never interleaved with another request.
pub type SharedSession<S, C> = Arc<Mutex<Session<S, C>>>;

/// Wrap `session` for use with [`api_router`].
pub fn shared<S, C>(session: Session<S, C>) -> SharedSession<S, C> {
  Arc::new(Mutex::new(session))
}

/// Build a fully-materialised API router for `session`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, C>(session: SharedSession<S, C>) -> Router<()>
where
  S: ThreadStore + 'static,
  C: Clock + Clone + 'static,
{
  Router::new()
    .route("/messages", post(messages::create::<S, C>))
    .route("/references", get(references::list::<S, C>))
    .route("/references/{reference}/messages", get(references::thread::<S, C>))
    .route("/stats", get(session::stats::<S, C>))
    .route("/reset", post(session::reset::<S, C>))
    .with_state(session)
}
