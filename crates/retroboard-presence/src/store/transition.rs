//! The presence reducer.

use std::collections::BTreeMap;

use crate::events::{JoinEntry, LeaveEntry, PresenceEvent};
use crate::roster::collection::Roster;
use crate::roster::presence::Presence;

use super::facilitator::assign_facilitator;

/// Produce the next roster from the current one and an incoming event.
///
/// Pure and total: never panics and performs no I/O. The input roster is
/// never mutated; callers keep the previous value intact and adopt the
/// returned one.
///
/// - [`PresenceEvent::ReplaceAll`] discards the current roster, takes the
///   snapshot verbatim, and recomputes facilitatorship over the full set.
/// - [`PresenceEvent::SyncDiff`] applies arrivals before departures, so a
///   join and a leave for unrelated tokens in the same diff are both
///   honored; a token named on both sides is removed. Facilitatorship is
///   recomputed over the result.
/// - [`PresenceEvent::UpdateAttributes`] shallow-merges fields into the
///   matching record and leaves every other record untouched. It does
///   **not** recompute facilitatorship: a patch is assumed not to touch
///   membership, and a patch that does change `online_at` leaves the role
///   stale until the next membership event. Callers that patch arrival
///   markers must follow up with a membership event.
pub fn transition(state: &Roster, event: &PresenceEvent) -> Roster {
    match event {
        PresenceEvent::ReplaceAll { presences } => {
            Roster::from_presences(assign_facilitator(presences.clone()))
        }
        PresenceEvent::SyncDiff { diff } => {
            let arrived = add_arrivals(state.as_slice(), &diff.joins);
            let remaining = remove_departures(arrived, &diff.leaves);
            Roster::from_presences(assign_facilitator(remaining))
        }
        PresenceEvent::UpdateAttributes { token, attributes } => {
            let presences = state
                .iter()
                .map(|presence| {
                    if presence.token == *token {
                        let mut patched = presence.clone();
                        patched.merge_attributes(attributes);
                        patched
                    } else {
                        presence.clone()
                    }
                })
                .collect();
            Roster::from_presences(presences)
        }
    }
}

/// Append arriving users, skipping any token already tracked.
///
/// The transport may redeliver a join; the skip makes arrival idempotent.
fn add_arrivals(existing: &[Presence], joins: &BTreeMap<String, JoinEntry>) -> Vec<Presence> {
    let mut presences = existing.to_vec();
    for entry in joins.values() {
        let already_tracked = presences
            .iter()
            .any(|presence| presence.token == entry.user.token);
        if !already_tracked {
            presences.push(entry.user.clone());
        }
    }
    presences
}

/// Drop every record whose token is named by a leave entry.
fn remove_departures(
    mut presences: Vec<Presence>,
    leaves: &BTreeMap<String, LeaveEntry>,
) -> Vec<Presence> {
    presences.retain(|presence| {
        !leaves
            .values()
            .any(|entry| entry.user.token == presence.token)
    });
    presences
}
