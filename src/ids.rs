//! ID types for Sleeper leagues, users, and players.
//!
//! Sleeper hands out every identifier as an opaque string, so each wrapper
//! holds a `String` and is passed through to the API verbatim.

use serde::Deserialize;
use std::fmt;

/// Type-safe wrapper for Sleeper League IDs.
///
/// Keeps league IDs from being mixed up with user or player IDs, which share
/// the same string representation on the wire.
///
/// # Examples
///
/// ```rust
/// use sleeper_keepers::LeagueId;
///
/// let league_id = LeagueId::new("784512345678901234");
/// assert_eq!(league_id.as_str(), "784512345678901234");
/// assert_eq!(league_id.to_string(), "784512345678901234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    /// Create a new LeagueId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeagueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Type-safe wrapper for Sleeper user IDs (the owner of a roster).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
