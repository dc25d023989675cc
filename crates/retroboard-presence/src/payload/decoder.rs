//! JSON decoding for presence event payloads.

use serde_json::Value;

use retroboard_core::{AppError, AppResult};

use crate::events::PresenceEvent;

/// Event tags the store understands.
const KNOWN_EVENT_KINDS: &[&str] = &["replace_all", "sync_diff", "update_attributes"];

/// Decode a raw transport payload into a typed presence event.
///
/// Returns `Ok(None)` for a well-formed payload whose `type` tag is not a
/// presence event kind; the caller skips dispatch and the roster stays
/// unchanged. Malformed JSON, a missing tag, or a recognized tag with a
/// malformed body is an error for the caller to reject or log.
pub fn decode_event(raw: &str) -> AppResult<Option<PresenceEvent>> {
    let value: Value = serde_json::from_str(raw).map_err(AppError::from)?;

    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::validation("Event payload has no type tag"))?;

    if !KNOWN_EVENT_KINDS.contains(&kind) {
        tracing::debug!(kind, "Ignoring unrecognized presence event kind");
        return Ok(None);
    }

    let event = serde_json::from_value(value).map_err(AppError::from)?;
    Ok(Some(event))
}

/// Encode a typed presence event back to its wire form.
pub fn encode_event(event: &PresenceEvent) -> AppResult<String> {
    serde_json::to_string(event).map_err(AppError::from)
}
