//! Identity types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a transaction sender, contract owner, producer or certifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    /// Create a new principal
    pub fn new<S: Into<String>>(id: S) -> Self {
        Principal(id.into())
    }

    /// Get the principal as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Principal(s)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Principal(s.to_string())
    }
}
