//! Integrity checks for presence payloads.
//!
//! The store never raises: a snapshot or diff that smuggles a duplicate or
//! empty token through would silently violate the roster's uniqueness
//! invariant. These checks let the hosting application reject such payloads
//! at the boundary instead. Running them is the caller's responsibility,
//! matching where deserialization errors are handled.

use std::collections::HashSet;

use retroboard_core::{AppError, AppResult};

use crate::events::{PresenceDiff, PresenceEvent};
use crate::roster::presence::Presence;

/// Maximum allowed payload size in bytes.
const MAX_PAYLOAD_SIZE: usize = 65_536;

/// Validates a raw payload before decoding.
pub fn validate_payload(raw: &str) -> AppResult<()> {
    if raw.len() > MAX_PAYLOAD_SIZE {
        return Err(AppError::validation(format!(
            "Payload exceeds maximum size of {} bytes",
            MAX_PAYLOAD_SIZE
        )));
    }

    if raw.trim().is_empty() {
        return Err(AppError::validation("Empty payload"));
    }

    Ok(())
}

/// Validates a decoded event's embedded membership data.
///
/// `UpdateAttributes` only needs a usable target token; snapshot and diff
/// events are checked for token integrity across their embedded records.
pub fn validate_event(event: &PresenceEvent) -> AppResult<()> {
    match event {
        PresenceEvent::ReplaceAll { presences } => validate_roster(presences),
        PresenceEvent::SyncDiff { diff } => validate_diff(diff),
        PresenceEvent::UpdateAttributes { token, .. } => {
            if token.is_empty() {
                return Err(AppError::validation("Attribute patch names an empty token"));
            }
            Ok(())
        }
    }
}

/// Validates a roster snapshot: no empty tokens, no duplicates.
pub fn validate_roster(presences: &[Presence]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for presence in presences {
        if presence.token.is_empty() {
            return Err(AppError::validation("Snapshot record has an empty token"));
        }
        if !seen.insert(presence.token.as_str()) {
            return Err(AppError::data_integrity(format!(
                "Snapshot contains duplicate token '{}'",
                presence.token
            )));
        }
    }
    Ok(())
}

/// Validates a membership diff: no empty tokens on either side, no
/// duplicate tokens among the arriving users.
pub fn validate_diff(diff: &PresenceDiff) -> AppResult<()> {
    let mut seen = HashSet::new();
    for entry in diff.joins.values() {
        if entry.user.token.is_empty() {
            return Err(AppError::validation("Join entry has an empty token"));
        }
        if !seen.insert(entry.user.token.as_str()) {
            return Err(AppError::data_integrity(format!(
                "Diff joins contain duplicate token '{}'",
                entry.user.token
            )));
        }
    }

    for entry in diff.leaves.values() {
        if entry.user.token.is_empty() {
            return Err(AppError::validation("Leave entry has an empty token"));
        }
    }

    Ok(())
}
