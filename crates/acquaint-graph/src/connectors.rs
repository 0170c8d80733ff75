//! Connectors (articulation points).
//!
//! A connector is a person whose removal splits their part of the graph
//! into more pieces. Found with a depth-first search that records each
//! vertex's discovery number (`dfsnum`) and the lowest discovery number
//! reachable from its subtree through at most one back edge (`back`).
//!
//! The search is iterative: each stack frame carries its vertex, DFS parent
//! and a cursor into the adjacency list, which reproduces the recursive
//! visit order exactly (discovery in pre-order, `back` propagation in
//! post-order).

use crate::graph::{PersonId, SocialGraph};
use crate::traversal::{Frontier, Stack};
use tracing::debug;

impl SocialGraph {
    /// Finds every connector in the graph.
    ///
    /// See [`connectors`].
    pub fn connectors(&self) -> Vec<String> {
        connectors(self)
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    person: PersonId,
    parent: Option<PersonId>,
    cursor: usize,
}

/// Finds every connector in the graph.
///
/// Each component gets its own DFS, rooted at its lowest-index person, with
/// discovery numbers restarting at 1. Names are returned once each, in
/// index order.
pub fn connectors(graph: &SocialGraph) -> Vec<String> {
    let n = graph.person_count();
    let mut visited = vec![false; n];
    let mut dfsnum = vec![0usize; n];
    let mut back = vec![0usize; n];
    let mut is_connector = vec![false; n];
    let mut stack: Stack<Frame> = Stack::new();

    for root in graph.person_ids() {
        if visited[root] {
            continue;
        }

        let mut counter = 1;
        let mut root_children = 0;
        visited[root] = true;
        dfsnum[root] = counter;
        back[root] = counter;
        stack.push(Frame {
            person: root,
            parent: None,
            cursor: 0,
        });

        while let Some(frame) = stack.peek_mut() {
            let Frame {
                person,
                parent,
                cursor,
            } = *frame;

            if let Some(&friend) = graph.friends_of(person).get(cursor) {
                frame.cursor += 1;

                if !visited[friend] {
                    // tree edge
                    counter += 1;
                    visited[friend] = true;
                    dfsnum[friend] = counter;
                    back[friend] = counter;
                    if parent.is_none() {
                        root_children += 1;
                    }
                    stack.push(Frame {
                        person: friend,
                        parent: Some(person),
                        cursor: 0,
                    });
                } else if parent != Some(friend) {
                    // back edge; the edge to the DFS parent is not a cycle
                    back[person] = back[person].min(dfsnum[friend]);
                }
                continue;
            }

            // All friends seen: hand the low-link up to the parent.
            stack.pop();
            if let Some(parent) = parent {
                back[parent] = back[parent].min(back[person]);
                if parent != root && dfsnum[parent] <= back[person] {
                    is_connector[parent] = true;
                }
            }
        }

        // Root rule. The root's dfsnum is 1 and every back value is at least
        // 1, so `dfsnum <= back` alone would hold for any root with a child,
        // and gating it only on "more than one adjacency entry" would flag
        // the root of every cycle. Parallel edges or back edges can give the
        // root several entries with a single subtree, so the rule counts DFS
        // tree children instead and keeps the adjacency gate on top.
        if graph.friends_of(root).len() > 1 && root_children > 1 {
            is_connector[root] = true;
        }
    }

    let result: Vec<String> = graph
        .person_ids()
        .filter(|&id| is_connector[id])
        .map(|id| graph.name(id).to_string())
        .collect();

    debug!("Found {} connectors among {} people", result.len(), n);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use acquaint_core::Person;
    use std::collections::BTreeSet;

    fn graph(names: &[&str], edges: &[(&str, &str)]) -> SocialGraph {
        let mut builder = GraphBuilder::new();
        builder
            .add_people(names.iter().map(|name| Person::new(*name)))
            .unwrap();
        for (a, b) in edges {
            builder.add_friendship(a, b).unwrap();
        }
        builder.build()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn connector_set(g: &SocialGraph) -> BTreeSet<String> {
        g.connectors().into_iter().collect()
    }

    #[test]
    fn test_path_middle() {
        let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        assert_eq!(g.connectors(), ["B"]);
    }

    #[test]
    fn test_path_rooted_in_the_middle() {
        // B has index 0 and becomes the DFS root with two tree children.
        let g = graph(&["B", "A", "C"], &[("A", "B"), ("B", "C")]);
        assert_eq!(g.connectors(), ["B"]);
    }

    #[test]
    fn test_cycle_has_no_connectors() {
        for size in 3..=6 {
            let names: Vec<String> = (0..size).map(|i| format!("p{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let edges: Vec<(&str, &str)> = (0..size)
                .map(|i| (refs[i], refs[(i + 1) % size]))
                .collect();
            let g = graph(&refs, &edges);
            assert!(g.connectors().is_empty(), "cycle of {size}");
        }
    }

    #[test]
    fn test_path_with_isolated_vertex() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D")],
        );
        assert_eq!(connector_set(&g), set(&["B", "C"]));
    }

    #[test]
    fn test_two_triangles_sharing_a_vertex() {
        let g = graph(
            &["A", "B", "M", "C", "D"],
            &[
                ("A", "B"),
                ("B", "M"),
                ("M", "A"),
                ("M", "C"),
                ("C", "D"),
                ("D", "M"),
            ],
        );
        assert_eq!(connector_set(&g), set(&["M"]));
    }

    #[test]
    fn test_shared_vertex_as_root() {
        let g = graph(
            &["M", "A", "B", "C", "D"],
            &[
                ("A", "B"),
                ("B", "M"),
                ("M", "A"),
                ("M", "C"),
                ("C", "D"),
                ("D", "M"),
            ],
        );
        assert_eq!(g.connectors(), ["M"]);
    }

    #[test]
    fn test_star() {
        let g = graph(
            &["hub", "a", "b", "c"],
            &[("hub", "a"), ("hub", "b"), ("hub", "c")],
        );
        assert_eq!(g.connectors(), ["hub"]);
    }

    #[test]
    fn test_leaf_root_of_star() {
        let g = graph(
            &["a", "hub", "b", "c"],
            &[("hub", "a"), ("hub", "b"), ("hub", "c")],
        );
        assert_eq!(g.connectors(), ["hub"]);
    }

    #[test]
    fn test_root_with_parallel_edge() {
        // Two entries in the root's adjacency list but a single DFS child.
        let g = graph(&["A", "B"], &[("A", "B"), ("A", "B")]);
        assert_eq!(g.friends_of(0).len(), 2);
        assert!(g.connectors().is_empty());
    }

    #[test]
    fn test_root_with_back_edge_into_one_subtree() {
        // A - B - C - A plus a pendant D off C: A has two adjacency
        // entries, both into the same subtree.
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")],
        );
        assert_eq!(g.connectors(), ["C"]);
    }

    #[test]
    fn test_parallel_edge_does_not_hide_cut_vertex() {
        let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("B", "C")]);
        assert_eq!(g.connectors(), ["B"]);
    }

    #[test]
    fn test_two_components() {
        // A - B - C    D - E - F - D
        let g = graph(
            &["A", "B", "C", "D", "E", "F"],
            &[("A", "B"), ("B", "C"), ("D", "E"), ("E", "F"), ("F", "D")],
        );
        assert_eq!(g.connectors(), ["B"]);
    }

    #[test]
    fn test_bridge_between_cycles() {
        // triangle A B C, triangle D E F, bridge C - D
        let g = graph(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B"),
                ("B", "C"),
                ("C", "A"),
                ("D", "E"),
                ("E", "F"),
                ("F", "D"),
                ("C", "D"),
            ],
        );
        assert_eq!(g.connectors(), ["C", "D"]);
    }

    #[test]
    fn test_trivial_graphs() {
        assert!(connectors(&SocialGraph::new()).is_empty());
        assert!(graph(&["A"], &[]).connectors().is_empty());
        assert!(graph(&["A", "B"], &[("A", "B")]).connectors().is_empty());
    }

    #[test]
    fn test_deterministic() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("B", "E")],
        );
        let first = g.connectors();
        for _ in 0..5 {
            assert_eq!(g.connectors(), first);
        }
        assert_eq!(first, ["B", "C"]);
    }

    #[test]
    fn test_long_path_does_not_overflow_stack() {
        let names: Vec<String> = (0..50_000).map(|i| format!("p{i}")).collect();
        let mut builder = GraphBuilder::new();
        builder
            .add_people(names.iter().map(|name| Person::new(name.as_str())))
            .unwrap();
        for pair in names.windows(2) {
            builder.add_friendship(&pair[0], &pair[1]).unwrap();
        }
        let g = builder.build();

        assert_eq!(g.connectors().len(), names.len() - 2);
    }
}
