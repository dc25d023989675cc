//! Facilitator derivation.
//!
//! The facilitator is the participant with the minimum `online_at` among
//! current members. The role is recomputed from scratch on every
//! membership-affecting event and never carried over from a previous
//! membership.

use retroboard_core::types::PresenceToken;

use crate::roster::presence::Presence;

/// Recompute `is_facilitator` across the given membership.
///
/// Earliest arrival wins. On a tie the first occurrence in iteration order
/// keeps the role: the scan uses a strict `<` comparison, so a later record
/// with an equal `online_at` never displaces an earlier one. An empty
/// membership is returned unchanged; no facilitator exists.
pub fn assign_facilitator(mut presences: Vec<Presence>) -> Vec<Presence> {
    let earliest = earliest_arrival(&presences);
    for presence in &mut presences {
        presence.is_facilitator = earliest.as_ref() == Some(&presence.token);
    }
    presences
}

/// Token of the earliest-arriving member, if any.
fn earliest_arrival(presences: &[Presence]) -> Option<PresenceToken> {
    let mut earliest: Option<&Presence> = None;
    for presence in presences {
        match earliest {
            Some(current) if presence.online_at < current.online_at => {
                earliest = Some(presence);
            }
            None => earliest = Some(presence),
            _ => {}
        }
    }
    earliest.map(|presence| presence.token.clone())
}
