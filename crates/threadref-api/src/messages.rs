//! Handler for `POST /messages`.
//!
//! Body: `{"sender": "...", "recipient": "...", "subject": "...", "body": "...",
//! "reference": "GG-LEGAL-2025-0001"}` where `reference` is optional.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use threadref_core::{clock::Clock, message::Filing, store::ThreadStore};

use crate::{SharedSession, error::Result};

/// `POST /messages` — files the message and returns it with `201 Created`.
pub async fn create<S, C>(
  State(session): State<SharedSession<S, C>>,
  body: Result<Json<Filing>, JsonRejection>,
) -> Result<impl IntoResponse>
where
  S: ThreadStore + 'static,
  C: Clock + Clone + 'static,
{
  let Json(filing) = body?;
  let message = session.lock().file_message(filing);
  tracing::info!(
    reference = %message.reference,
    position = message.thread_position,
    "message filed"
  );
  Ok((StatusCode::CREATED, Json(message)))
}
