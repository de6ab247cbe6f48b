//! Subject-line rewriting.
//!
//! Every filed message must carry its reference in the subject so that
//! replies sent from ordinary mail clients can be matched back to the thread.

/// The reply marker recognised at the start of a subject. Case-sensitive.
pub const REPLY_MARKER: &str = "RE:";

/// Ensure `reference` appears verbatim in `subject`.
///
/// A subject that already contains the reference is returned unchanged, which
/// makes the rewrite idempotent. Otherwise the reference is bracketed in
/// front of the subject text; for replies it goes after the marker:
///
/// ```
/// use threadref_core::subject::inject_reference;
///
/// assert_eq!(
///   inject_reference("Legal Service Request", "GG-LEGAL-2025-0001"),
///   "[GG-LEGAL-2025-0001] Legal Service Request",
/// );
/// assert_eq!(
///   inject_reference("RE:  Legal Service Request", "GG-LEGAL-2025-0001"),
///   "RE: [GG-LEGAL-2025-0001] Legal Service Request",
/// );
/// ```
pub fn inject_reference(subject: &str, reference: &str) -> String {
  if subject.contains(reference) {
    return subject.to_owned();
  }
  match subject.strip_prefix(REPLY_MARKER) {
    Some(rest) => format!("{REPLY_MARKER} [{reference}] {}", rest.trim()),
    None => format!("[{reference}] {subject}"),
  }
}
