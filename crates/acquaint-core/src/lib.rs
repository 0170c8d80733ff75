//! Acquaint Core - People and rosters
//!
//! This crate holds the plain records every other Acquaint crate works
//! with: a [`Person`] with an optional affiliation, an undirected
//! [`Friendship`] between two names, and the [`Roster`] that bundles
//! both as produced by a loader.
//!
//! # Roster format
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|y|rutgers
//! bob|n
//! kaitlin|y|penn state
//! sam|jane
//! jane|bob
//! ```
//!
//! The first line is the number of people, followed by exactly that many
//! person lines and then any number of friendship lines.
//!
//! # Example
//!
//! ```
//! use acquaint_core::Roster;
//!
//! let roster = Roster::parse("2\nsam|y|rutgers\njane|n\nsam|jane\n").unwrap();
//! assert_eq!(roster.people.len(), 2);
//! assert_eq!(roster.friendships.len(), 1);
//! ```

pub mod error;
mod person;
mod roster;

pub use error::{Result, RosterError};
pub use person::{Friendship, Person};
pub use roster::Roster;
