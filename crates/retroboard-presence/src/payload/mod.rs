//! Transport payload boundary.
//!
//! The engine itself is total over typed input; everything fallible about
//! raw transport payloads lives here. The hosting application decodes each
//! payload with [`decoder::decode_event`], optionally runs the integrity
//! checks in [`validator`], and only then dispatches the typed event into
//! the store.

pub mod decoder;
pub mod validator;

pub use decoder::{decode_event, encode_event};
