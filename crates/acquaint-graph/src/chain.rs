//! Shortest acquaintance chains.
//!
//! Breadth-first search from the source person. The search stops the
//! moment the target is discovered, before it is ever dequeued, and the
//! chain is rebuilt by walking predecessors back to the source.

use crate::graph::{PersonId, SocialGraph};
use crate::traversal::{Frontier, Queue};
use tracing::debug;

impl SocialGraph {
    /// Finds the shortest chain of friends from `from` to `to`.
    ///
    /// See [`shortest_chain`].
    pub fn shortest_chain(&self, from: &str, to: &str) -> Option<Vec<String>> {
        shortest_chain(self, from, to)
    }

    /// Number of friendships on the shortest chain, `None` if unreachable.
    pub fn chain_length(&self, from: &str, to: &str) -> Option<usize> {
        shortest_chain(self, from, to).map(|chain| chain.len() - 1)
    }
}

/// Finds the shortest chain of friends from `from` to `to`.
///
/// The chain starts with `from`, ends with `to`, and every consecutive pair
/// is a friendship. Among equally short chains, the one found by following
/// adjacency lists in insertion order wins.
///
/// Returns `None` if either name is unknown or no chain exists. A person's
/// chain to themselves is just `[from]`.
pub fn shortest_chain(graph: &SocialGraph, from: &str, to: &str) -> Option<Vec<String>> {
    let source = graph.index_of(from)?;
    let target = graph.index_of(to)?;

    if source == target {
        return Some(vec![graph.name(source).to_string()]);
    }

    let n = graph.person_count();
    let mut visited = vec![false; n];
    let mut distance = vec![0usize; n];
    let mut predecessor: Vec<Option<PersonId>> = vec![None; n];
    let mut queue = Queue::with_capacity(n);

    visited[source] = true;
    queue.push(source);

    while let Some(current) = queue.pop() {
        for &friend in graph.friends_of(current) {
            if visited[friend] {
                continue;
            }

            visited[friend] = true;
            distance[friend] = distance[current] + 1;
            predecessor[friend] = Some(current);

            if friend == target {
                let chain = walk_back(graph, &predecessor, target);
                debug_assert_eq!(chain.len() - 1, distance[target]);
                debug!("Chain {} -> {}: {} hops", from, to, distance[target]);
                return Some(chain);
            }

            queue.push(friend);
        }
    }

    debug!("No chain {} -> {}", from, to);
    None
}

fn walk_back(
    graph: &SocialGraph,
    predecessor: &[Option<PersonId>],
    target: PersonId,
) -> Vec<String> {
    let mut chain = Vec::new();
    let mut cursor = Some(target);

    while let Some(id) = cursor {
        chain.push(graph.name(id).to_string());
        cursor = predecessor[id];
    }

    chain.reverse();
    chain
}
