//! The presence roster: participant records and the session collection.

pub mod collection;
pub mod presence;

pub use collection::Roster;
pub use presence::Presence;
