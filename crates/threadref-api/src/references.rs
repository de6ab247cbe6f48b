//! Handlers for `/references` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/references` | Sorted ascending |
//! | `GET`  | `/references/{reference}/messages` | Oldest first; `[]` if unknown |

use axum::{
  Json,
  extract::{Path, State},
};
use threadref_core::{clock::Clock, message::Message, store::ThreadStore};

use crate::SharedSession;

/// `GET /references`
pub async fn list<S, C>(State(session): State<SharedSession<S, C>>) -> Json<Vec<String>>
where
  S: ThreadStore + 'static,
  C: Clock + Clone + 'static,
{
  Json(session.lock().sorted_references())
}

/// `GET /references/{reference}/messages`
pub async fn thread<S, C>(
  State(session): State<SharedSession<S, C>>,
  Path(reference): Path<String>,
) -> Json<Vec<Message>>
where
  S: ThreadStore + 'static,
  C: Clock + Clone + 'static,
{
  Json(session.lock().by_reference(&reference))
}
