//! Presence event definitions and action constructors.
//!
//! The transport delivers three event kinds: a full roster snapshot, an
//! incremental join/leave diff, and a targeted attribute patch. They form a
//! closed tagged union so dispatch in the store is exhaustiveness-checked;
//! payloads with an unrecognized tag never construct a `PresenceEvent` and
//! are dropped at the decode boundary instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use retroboard_core::types::PresenceToken;

use crate::roster::presence::Presence;

/// Events consumed by the presence store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresenceEvent {
    /// Replace the whole roster with a fresh snapshot.
    ReplaceAll {
        /// The full set of current participants, in snapshot order.
        presences: Vec<Presence>,
    },
    /// Apply an incremental membership diff.
    SyncDiff {
        /// Participants who joined and/or left since the last known state.
        diff: PresenceDiff,
    },
    /// Patch a known participant's profile fields.
    UpdateAttributes {
        /// The participant to patch.
        token: PresenceToken,
        /// Fields to shallow-merge into the record.
        attributes: Map<String, Value>,
    },
}

impl PresenceEvent {
    /// Build a full-replacement event from a roster snapshot.
    pub fn replace_all(presences: Vec<Presence>) -> Self {
        Self::ReplaceAll { presences }
    }

    /// Build a diff-sync event from a membership diff.
    pub fn sync_diff(diff: PresenceDiff) -> Self {
        Self::SyncDiff { diff }
    }

    /// Build an attribute-patch event for the given participant.
    pub fn update_attributes(
        token: impl Into<PresenceToken>,
        attributes: Map<String, Value>,
    ) -> Self {
        Self::UpdateAttributes {
            token: token.into(),
            attributes,
        }
    }
}

/// An incremental membership diff, keyed by the transport's opaque
/// per-connection reference.
///
/// The maps are `BTreeMap` so diff application is deterministic: arrivals
/// append to the roster in ascending reference order regardless of how the
/// payload happened to order its keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceDiff {
    /// Participants who joined, each carrying the full user record.
    #[serde(default)]
    pub joins: BTreeMap<String, JoinEntry>,
    /// Participants who left; only the embedded token is consumed.
    #[serde(default)]
    pub leaves: BTreeMap<String, LeaveEntry>,
}

impl PresenceDiff {
    /// An empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a join entry, builder-style.
    pub fn with_join(mut self, reference: impl Into<String>, user: Presence) -> Self {
        self.joins.insert(reference.into(), JoinEntry { user });
        self
    }

    /// Add a leave entry, builder-style.
    pub fn with_leave(
        mut self,
        reference: impl Into<String>,
        token: impl Into<PresenceToken>,
    ) -> Self {
        self.leaves.insert(
            reference.into(),
            LeaveEntry {
                user: Departure {
                    token: token.into(),
                },
            },
        );
        self
    }

    /// Whether the diff carries no membership changes.
    pub fn is_empty(&self) -> bool {
        self.joins.is_empty() && self.leaves.is_empty()
    }
}

/// One entry on the `joins` side of a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinEntry {
    /// The arriving participant's full record.
    pub user: Presence,
}

/// One entry on the `leaves` side of a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// The departing participant; fields beyond the token are ignored.
    pub user: Departure,
}

/// The identifying remnant of a departing participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    /// Token of the record to remove.
    pub token: PresenceToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_replace_all_constructor() {
        let presences = vec![Presence::new("abc", 2)];
        let event = PresenceEvent::replace_all(presences.clone());
        assert_eq!(event, PresenceEvent::ReplaceAll { presences });
    }

    #[test]
    fn test_update_attributes_constructor() {
        let mut attributes = Map::new();
        attributes.insert("age".to_string(), json!(170));
        let event = PresenceEvent::update_attributes("abcde12345", attributes.clone());
        assert_eq!(
            event,
            PresenceEvent::UpdateAttributes {
                token: PresenceToken::new("abcde12345"),
                attributes,
            }
        );
    }

    #[test]
    fn test_sync_diff_constructor_passes_diff_through() {
        let diff = PresenceDiff::new()
            .with_join("someUserToken", Presence::new("someUserToken", 29))
            .with_leave("someOtherUserToken", "someOtherUserToken");
        let event = PresenceEvent::sync_diff(diff.clone());
        assert_eq!(event, PresenceEvent::SyncDiff { diff });
    }

    #[test]
    fn test_event_wire_tags() {
        let event = PresenceEvent::replace_all(vec![]);
        let value = serde_json::to_value(&event).expect("serialize");
        assert_eq!(value["type"], json!("replace_all"));

        let event = PresenceEvent::sync_diff(PresenceDiff::new());
        let value = serde_json::to_value(&event).expect("serialize");
        assert_eq!(value["type"], json!("sync_diff"));
    }

    #[test]
    fn test_diff_deserializes_from_wire_shape() {
        let diff: PresenceDiff = serde_json::from_value(json!({
            "joins": {
                "ref-1": {"user": {"token": "ABC", "online_at": 10, "name": "Kevin"}},
            },
            "leaves": {
                "ref-2": {"user": {"token": "XYZ", "name": "Sarah"}},
            },
        }))
        .expect("deserialize");

        assert_eq!(diff.joins["ref-1"].user.name(), Some("Kevin"));
        assert_eq!(diff.leaves["ref-2"].user.token, PresenceToken::new("XYZ"));
    }

    #[test]
    fn test_diff_sides_default_when_absent() {
        let diff: PresenceDiff = serde_json::from_value(json!({})).expect("deserialize");
        assert!(diff.is_empty());
    }
}
