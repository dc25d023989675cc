//! The session's presence collection and its read-only selector surface.

use serde::{Deserialize, Serialize};

use retroboard_core::types::PresenceToken;

use super::presence::Presence;

/// An insertion-ordered collection of [`Presence`] records.
///
/// Order is whatever the last full replacement or incremental update
/// produced; it is not sorted by arrival time. The rendering layer reads
/// the roster through the selector methods and never mutates it; new
/// roster values are produced exclusively by the store's transition
/// function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Presence>);

impl Roster {
    /// The empty roster a freshly mounted session starts with.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap a sequence of records verbatim, preserving its order.
    pub fn from_presences(presences: Vec<Presence>) -> Self {
        Self(presences)
    }

    /// Number of participants in the session.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the session has no participants.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Presence> {
        self.0.iter()
    }

    /// View the records as a slice.
    pub fn as_slice(&self) -> &[Presence] {
        &self.0
    }

    /// Unwrap into the underlying record sequence.
    pub fn into_presences(self) -> Vec<Presence> {
        self.0
    }

    /// Find a participant by connection token.
    pub fn get(&self, token: &PresenceToken) -> Option<&Presence> {
        self.0.iter().find(|presence| presence.token == *token)
    }

    /// Whether a participant with the given token is tracked.
    pub fn contains(&self, token: &PresenceToken) -> bool {
        self.get(token).is_some()
    }

    /// The participant currently holding the facilitator role.
    ///
    /// `None` on an empty roster; consumers must handle that case.
    pub fn facilitator(&self) -> Option<&Presence> {
        self.0.iter().find(|presence| presence.is_facilitator)
    }

    /// The facilitator's display name, if there is a facilitator and their
    /// profile carries a name.
    pub fn facilitator_name(&self) -> Option<&str> {
        self.facilitator().and_then(Presence::name)
    }
}

impl From<Vec<Presence>> for Roster {
    fn from(presences: Vec<Presence>) -> Self {
        Self(presences)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Presence;
    type IntoIter = std::slice::Iter<'a, Presence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
