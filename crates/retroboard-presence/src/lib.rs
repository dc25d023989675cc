//! # retroboard-presence
//!
//! Presence reconciliation engine for the Retroboard client state layer.
//! Provides:
//!
//! - The [`Presence`] record and insertion-ordered [`Roster`] collection
//! - The closed [`PresenceEvent`] type with pure action constructors
//! - The pure [`transition`] reducer with facilitator derivation
//! - JSON payload decoding and roster integrity validation at the
//!   transport boundary
//!
//! The engine is synchronous and stateless between calls: the hosting
//! application holds the current [`Roster`] value and feeds each incoming
//! transport event through [`transition`] in delivery order.

pub mod events;
pub mod payload;
pub mod roster;
pub mod store;

pub use events::{PresenceDiff, PresenceEvent};
pub use roster::collection::Roster;
pub use roster::presence::Presence;
pub use store::transition::transition;
