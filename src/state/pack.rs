//! Detail-screen state for a single content pack.

#[cfg(test)]
#[path = "pack_test.rs"]
mod pack_test;

use std::collections::HashMap;

use crate::net::types::ContentPack;

/// Fallback reason sent when a reviewer rejects without writing notes.
pub const DEFAULT_REJECT_NOTES: &str = "Needs changes";

/// Detail screen state. `pack = None` means the record is still loading;
/// `busy` is set while a mutation round-trip (action + re-fetch) is in
/// flight so repeated clicks cannot overlap requests.
#[derive(Clone, Debug, Default)]
pub struct PackState {
    pub pack: Option<ContentPack>,
    pub busy: bool,
    pub error: Option<String>,
}

/// Reject payload text: the reviewer's verbatim notes, or the fixed fallback
/// when the field is empty. Whitespace-only notes count as written and are
/// sent untouched.
pub fn effective_reject_notes(notes: &str) -> &str {
    if notes.is_empty() {
        DEFAULT_REJECT_NOTES
    } else {
        notes
    }
}

/// Justification recorded for `tag`, or empty text when the service omitted
/// one. Tags without a `why_tagged` entry still render; the gap stays
/// visible rather than being patched client-side.
pub fn tag_reason(why_tagged: &HashMap<String, String>, tag: &str) -> String {
    why_tagged.get(tag).cloned().unwrap_or_default()
}
