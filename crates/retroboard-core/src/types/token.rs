//! Newtype wrapper for presence connection tokens.
//!
//! The transport mints one opaque token per connection. A token is stable
//! for the lifetime of a join-session but may differ from the participant's
//! identity across reconnects, so it is kept as an opaque string rather
//! than parsed into any structured identifier. Using a distinct type
//! prevents accidentally passing an arbitrary string where a token is
//! expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a participant's connection.
///
/// Used as the join/merge/removal key throughout the presence engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresenceToken(pub String);

impl PresenceToken {
    /// Create a token from any string-like value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Return the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the inner string value.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the token is the empty string.
    ///
    /// The transport never mints empty tokens; an empty token in a payload
    /// is a data-integrity fault caught by the payload validator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PresenceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PresenceToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for PresenceToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}
