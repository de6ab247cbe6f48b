//! Session-wide handlers: statistics and full reset.

use axum::{Json, extract::State, http::StatusCode};
use threadref_core::{clock::Clock, session::SessionStats, store::ThreadStore};

use crate::SharedSession;

/// `GET /stats`
pub async fn stats<S, C>(State(session): State<SharedSession<S, C>>) -> Json<SessionStats>
where
  S: ThreadStore + 'static,
  C: Clock + Clone + 'static,
{
  Json(session.lock().stats())
}

/// `POST /reset` — discards every message and rewinds the counter.
pub async fn reset<S, C>(State(session): State<SharedSession<S, C>>) -> StatusCode
where
  S: ThreadStore + 'static,
  C: Clock + Clone + 'static,
{
  session.lock().reset();
  StatusCode::NO_CONTENT
}
