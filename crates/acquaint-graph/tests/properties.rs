//! Property tests against brute-force and petgraph oracles on small random
//! graphs (parallel friendships included).

use acquaint_core::Person;
use acquaint_graph::{GraphBuilder, SocialGraph};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use proptest::prelude::*;
use std::collections::HashSet;

const AFFILIATIONS: [Option<&str>; 3] = [Some("x"), Some("y"), None];

fn arb_graph() -> impl Strategy<Value = SocialGraph> {
    (1usize..12)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0..AFFILIATIONS.len(), n),
                prop::collection::vec((0..n, 0..n), 0..n * 3),
            )
        })
        .prop_map(|(affiliations, edges)| {
            let mut builder = GraphBuilder::new();
            for (i, &slot) in affiliations.iter().enumerate() {
                let person = Person::new(format!("p{i}"));
                let person = match AFFILIATIONS[slot] {
                    Some(affiliation) => person.with_affiliation(affiliation),
                    None => person,
                };
                builder.add_person(person).unwrap();
            }
            for (a, b) in edges.into_iter().filter(|(a, b)| a != b) {
                builder
                    .add_friendship(&format!("p{a}"), &format!("p{b}"))
                    .unwrap();
            }
            builder.build()
        })
}

/// Components among the people allowed by `keep`.
fn component_count(graph: &SocialGraph, keep: impl Fn(usize) -> bool) -> usize {
    let mut sets = UnionFind::new(graph.person_count());
    for a in graph.person_ids().filter(|&a| keep(a)) {
        for &b in graph.friends_of(a) {
            if keep(b) {
                sets.union(a, b);
            }
        }
    }
    graph
        .person_ids()
        .filter(|&a| keep(a))
        .map(|a| sets.find(a))
        .collect::<HashSet<_>>()
        .len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn chain_matches_bfs_distance(graph in arb_graph()) {
        let pg = graph.to_petgraph();

        for a in graph.person_ids() {
            let distances = dijkstra(&pg, NodeIndex::new(a), None, |_| 1usize);
            let from = &graph.get(a).unwrap().name;

            for b in graph.person_ids() {
                let to = &graph.get(b).unwrap().name;
                let chain = graph.shortest_chain(from, to);

                match distances.get(&NodeIndex::new(b)) {
                    None => prop_assert!(chain.is_none()),
                    Some(&distance) => {
                        let chain = chain.unwrap();
                        prop_assert_eq!(chain.len() - 1, distance);
                        prop_assert_eq!(chain.first(), Some(from));
                        prop_assert_eq!(chain.last(), Some(to));
                        for pair in chain.windows(2) {
                            prop_assert!(graph.are_friends(&pair[0], &pair[1]));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn groups_partition_affiliation(graph in arb_graph()) {
        for affiliation in ["x", "y"] {
            let groups = graph.affiliation_groups(affiliation);

            let mut seen = HashSet::new();
            for name in groups.iter().flatten() {
                prop_assert!(seen.insert(name.clone()), "{} in two groups", name);
            }

            let expected: HashSet<String> = graph
                .people()
                .filter(|p| p.is_affiliated_with(affiliation))
                .map(|p| p.name.clone())
                .collect();
            prop_assert_eq!(&seen, &expected);

            // Each group is exactly one component of the induced subgraph.
            let matching = |id: usize| graph.get(id).unwrap().is_affiliated_with(affiliation);
            prop_assert_eq!(groups.len(), component_count(&graph, matching));
            for group in &groups {
                let members: HashSet<usize> =
                    group.iter().map(|n| graph.index_of(n).unwrap()).collect();
                prop_assert_eq!(component_count(&graph, |id| members.contains(&id)), 1);
            }
        }
    }

    #[test]
    fn connectors_match_vertex_removal(graph in arb_graph()) {
        let found: HashSet<String> = graph.connectors().into_iter().collect();
        let baseline = component_count(&graph, |_| true);

        for v in graph.person_ids() {
            let without = component_count(&graph, |id| id != v);
            let name = &graph.get(v).unwrap().name;
            prop_assert_eq!(
                found.contains(name),
                without > baseline,
                "{} removal: {} -> {} components",
                name,
                baseline,
                without
            );
        }
    }

    #[test]
    fn queries_are_deterministic(graph in arb_graph()) {
        prop_assert_eq!(graph.connectors(), graph.connectors());
        prop_assert_eq!(graph.affiliation_groups("x"), graph.affiliation_groups("x"));
        prop_assert_eq!(graph.shortest_chain("p0", "p1"), graph.shortest_chain("p0", "p1"));
    }
}
