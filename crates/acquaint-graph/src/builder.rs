//! Graph builder for constructing the social graph from a roster.
//!
//! The builder is the only place where people and friendships enter a
//! graph, so it is where the loader invariants are enforced: unique names,
//! known endpoints, no self-friendships.

use crate::error::GraphError;
use crate::graph::{PersonId, SocialGraph};
use acquaint_core::{Person, Roster};
use tracing::{debug, warn};

/// Builds a SocialGraph from people and friendships.
///
/// People must be added before the friendships that mention them.
pub struct GraphBuilder {
    graph: SocialGraph,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: SocialGraph::new(),
        }
    }

    /// Adds a person and returns their index.
    pub fn add_person(&mut self, person: Person) -> Result<PersonId, GraphError> {
        if self.graph.index_of(&person.name).is_some() {
            return Err(GraphError::DuplicatePerson(person.name));
        }
        Ok(self.graph.push_person(person))
    }

    /// Adds several people in order.
    pub fn add_people(
        &mut self,
        people: impl IntoIterator<Item = Person>,
    ) -> Result<(), GraphError> {
        for person in people {
            self.add_person(person)?;
        }
        Ok(())
    }

    /// Adds an undirected friendship between two known people.
    ///
    /// Repeating a friendship is allowed and stores a parallel edge.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let lookup = |name: &str| {
            self.graph
                .index_of(name)
                .ok_or_else(|| GraphError::UnknownPerson(name.to_string()))
        };
        let (a_idx, b_idx) = (lookup(a)?, lookup(b)?);

        if a_idx == b_idx {
            return Err(GraphError::SelfFriendship(a.to_string()));
        }

        if self.graph.friends_of(a_idx).contains(&b_idx) {
            warn!("Duplicate friendship {} - {}, keeping parallel edge", a, b);
        }

        self.graph.push_friendship(a_idx, b_idx);
        Ok(())
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> SocialGraph {
        debug!(
            "Built graph: {} people, {} friendships",
            self.graph.person_count(),
            self.graph.friendship_count()
        );
        self.graph
    }
}

impl SocialGraph {
    /// Builds a graph from a parsed roster.
    pub fn from_roster(roster: Roster) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::new();
        builder.add_people(roster.people)?;
        for friendship in &roster.friendships {
            builder.add_friendship(&friendship.0, &friendship.1)?;
        }
        Ok(builder.build())
    }
}
