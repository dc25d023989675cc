//! The presence state-transition core.

pub mod facilitator;
pub mod transition;

pub use transition::transition;
