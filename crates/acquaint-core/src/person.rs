//! Person and friendship records.

use serde::{Deserialize, Serialize};

/// A member of the social graph.
///
/// Names are case-sensitive and must be unique within one graph. The
/// affiliation (a school, a company, a club) is optional; a person without
/// one never belongs to an affiliation group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Person {
    /// Creates a person without an affiliation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: None,
        }
    }

    /// Sets the affiliation.
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    /// Exact, case-sensitive affiliation match.
    pub fn is_affiliated_with(&self, affiliation: &str) -> bool {
        self.affiliation.as_deref() == Some(affiliation)
    }
}

/// An undirected friendship between two people, by name.
///
/// Serializes as a two-element array: `["sam", "jane"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Friendship(pub String, pub String);

impl Friendship {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self(a.into(), b.into())
    }
}
