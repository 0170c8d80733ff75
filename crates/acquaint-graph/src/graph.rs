//! Core graph data structure.
//!
//! The SocialGraph stores people by dense index with ordered adjacency
//! lists, plus indexes for name and affiliation lookups. It's the read-only
//! snapshot every query works against.

use acquaint_core::{Friendship, Person, Roster};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// Stable index of a person, assigned in load order.
pub type PersonId = usize;

/// The acquaintance graph.
///
/// Friendships are undirected: adding `(u, v)` appends `v` to `u`'s list and
/// `u` to `v`'s list, so both sides always agree. Only [`GraphBuilder`]
/// adds people or friendships; once built the graph is immutable.
///
/// [`GraphBuilder`]: crate::GraphBuilder
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// People in index order.
    people: Vec<Person>,

    /// Neighbor indexes per person, in insertion order.
    adjacency: Vec<Vec<PersonId>>,

    /// Friendships in insertion order, kept for export.
    friendships: Vec<(PersonId, PersonId)>,

    /// Maps names to indexes.
    name_index: HashMap<String, PersonId>,

    /// Maps affiliations to their members, in index order.
    affiliation_index: HashMap<String, Vec<PersonId>>,
}

impl SocialGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a person. The caller guarantees the name is new.
    pub(crate) fn push_person(&mut self, person: Person) -> PersonId {
        let id = self.people.len();

        self.name_index.insert(person.name.clone(), id);
        if let Some(affiliation) = &person.affiliation {
            self.affiliation_index
                .entry(affiliation.clone())
                .or_default()
                .push(id);
        }

        self.people.push(person);
        self.adjacency.push(Vec::new());
        id
    }

    /// Links two existing, distinct people.
    pub(crate) fn push_friendship(&mut self, a: PersonId, b: PersonId) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.friendships.push((a, b));
    }

    /// Returns the number of people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the number of friendships, parallel ones included.
    pub fn friendship_count(&self) -> usize {
        self.friendships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Gets a person by index.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Looks up the index for a name. Case-sensitive.
    pub fn index_of(&self, name: &str) -> Option<PersonId> {
        self.name_index.get(name).copied()
    }

    /// Name of a person known to exist.
    pub(crate) fn name(&self, id: PersonId) -> &str {
        &self.people[id].name
    }

    /// Neighbors of a person in insertion order. Empty for unknown indexes.
    pub fn friends_of(&self, id: PersonId) -> &[PersonId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether two people are directly linked.
    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.friends_of(a).contains(&b),
            _ => false,
        }
    }

    /// Members of an affiliation in index order.
    pub fn members_of(&self, affiliation: &str) -> &[PersonId] {
        self.affiliation_index
            .get(affiliation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All distinct affiliations, sorted.
    pub fn affiliations(&self) -> Vec<&str> {
        let mut affiliations: Vec<&str> =
            self.affiliation_index.keys().map(String::as_str).collect();
        affiliations.sort_unstable();
        affiliations
    }

    /// Iterates over people in index order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// All valid person indexes.
    pub fn person_ids(&self) -> Range<PersonId> {
        0..self.people.len()
    }

    /// Rebuilds the roster this graph was loaded from.
    ///
    /// Building a graph from the returned roster reproduces the same
    /// indexes and adjacency order.
    pub fn to_roster(&self) -> Roster {
        Roster {
            people: self.people.clone(),
            friendships: self
                .friendships
                .iter()
                .map(|&(a, b)| Friendship::new(self.name(a), self.name(b)))
                .collect(),
        }
    }

    /// Converts to a petgraph graph with names as node weights.
    ///
    /// Node indexes match person indexes.
    pub fn to_petgraph(&self) -> UnGraph<String, ()> {
        let mut graph = UnGraph::with_capacity(self.people.len(), self.friendships.len());
        for person in &self.people {
            graph.add_node(person.name.clone());
        }
        for &(a, b) in &self.friendships {
            graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        graph
    }

    /// Counts connected components, isolated people included.
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph())
    }
}

/// Graph statistics for the stats command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub people: usize,
    pub friendships: usize,
    pub affiliations: usize,
    pub components: usize,
}

impl SocialGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            people: self.person_count(),
            friendships: self.friendship_count(),
            affiliations: self.affiliation_index.len(),
            components: self.component_count(),
        }
    }
}
