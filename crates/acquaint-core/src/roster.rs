//! Roster parsing.
//!
//! A roster is the flat, loader-level view of a social graph: who exists
//! and who knows whom. Graph construction and invariant checks live in
//! `acquaint-graph`; this module only deals with the text format.

use crate::error::{Result, RosterError};
use crate::person::{Friendship, Person};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// People and friendships in load order.
///
/// Order matters: people receive their graph index in `people` order, and
/// friendships are inserted into adjacency lists in `friendships` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub people: Vec<Person>,
    #[serde(default)]
    pub friendships: Vec<Friendship>,
}

impl Roster {
    /// Reads and parses a text roster file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses the pipe-delimited roster format.
    ///
    /// Blank lines are skipped and every field is trimmed. Duplicate names
    /// and unknown friends are not checked here; the graph builder rejects
    /// them.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (count_line, count_text) = lines.next().ok_or(RosterError::MissingCount)?;
        let expected: usize = count_text.parse().map_err(|_| RosterError::InvalidCount {
            line: count_line,
            found: count_text.to_string(),
        })?;

        let mut people = Vec::with_capacity(expected);
        while people.len() < expected {
            let Some((line, text)) = lines.next() else {
                return Err(RosterError::MissingPeople {
                    expected,
                    found: people.len(),
                });
            };
            people.push(parse_person(line, text)?);
        }

        let friendships = lines
            .map(|(line, text)| parse_friendship(line, text))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Parsed roster: {} people, {} friendships",
            people.len(),
            friendships.len()
        );

        Ok(Self {
            people,
            friendships,
        })
    }
}

fn parse_person(line: usize, text: &str) -> Result<Person> {
    let malformed = |reason| RosterError::MalformedPerson { line, reason };
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();

    let person = match fields.as_slice() {
        [name, flag, affiliation] if flag.eq_ignore_ascii_case("y") => {
            if affiliation.is_empty() {
                return Err(malformed("empty affiliation"));
            }
            Person::new(*name).with_affiliation(*affiliation)
        }
        [name, flag] if flag.eq_ignore_ascii_case("n") => Person::new(*name),
        [_, flag, ..] if !flag.eq_ignore_ascii_case("y") && !flag.eq_ignore_ascii_case("n") => {
            return Err(malformed("affiliation flag must be `y` or `n`"));
        }
        _ => return Err(malformed("expected `name|y|affiliation` or `name|n`")),
    };

    if person.name.is_empty() {
        return Err(malformed("empty name"));
    }

    Ok(person)
}

fn parse_friendship(line: usize, text: &str) -> Result<Friendship> {
    match text.split('|').map(str::trim).collect::<Vec<_>>().as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok(Friendship::new(*a, *b)),
        _ => Err(RosterError::MalformedFriendship {
            line,
            found: text.to_string(),
        }),
    }
}
