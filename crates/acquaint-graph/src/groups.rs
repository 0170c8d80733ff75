//! Affiliation groups ("cliques").
//!
//! A group is a connected component of the subgraph induced by the people
//! holding one affiliation. Members need not all know each other; they only
//! need to be linked through friends of the same affiliation. Someone
//! outside the affiliation never joins a group and never bridges two
//! members either.

use crate::graph::{PersonId, SocialGraph};
use crate::traversal::{Frontier, Stack};
use tracing::debug;

impl SocialGraph {
    /// Splits the members of `affiliation` into friend groups.
    ///
    /// See [`affiliation_groups`].
    #[doc(alias = "cliques")]
    pub fn affiliation_groups(&self, affiliation: &str) -> Vec<Vec<String>> {
        affiliation_groups(self, affiliation)
    }
}

/// Splits the members of `affiliation` into friend groups.
///
/// Groups are ordered by their lowest-index member. Names within a group
/// appear in depth-first discovery order, following adjacency lists in
/// insertion order. Returns an empty list when nobody holds the
/// affiliation.
pub fn affiliation_groups(graph: &SocialGraph, affiliation: &str) -> Vec<Vec<String>> {
    let members = graph.members_of(affiliation);
    if members.is_empty() {
        debug!("No members for affiliation {:?}", affiliation);
        return Vec::new();
    }

    let matches = |id: PersonId| {
        graph
            .get(id)
            .is_some_and(|person| person.is_affiliated_with(affiliation))
    };

    let mut visited = vec![false; graph.person_count()];
    let mut groups = Vec::new();
    // (person, index of the next friend to look at)
    let mut stack: Stack<(PersonId, usize)> = Stack::new();

    for &start in members {
        if visited[start] {
            continue;
        }

        visited[start] = true;
        let mut group = vec![graph.name(start).to_string()];
        stack.push((start, 0));

        while let Some(frame) = stack.peek_mut() {
            let (current, cursor) = *frame;
            let Some(&friend) = graph.friends_of(current).get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            // Outsiders are neither marked nor explored past.
            if !visited[friend] && matches(friend) {
                visited[friend] = true;
                group.push(graph.name(friend).to_string());
                stack.push((friend, 0));
            }
        }

        groups.push(group);
    }

    debug!(
        "Affiliation {:?}: {} members in {} groups",
        affiliation,
        members.len(),
        groups.len()
    );

    groups
}
