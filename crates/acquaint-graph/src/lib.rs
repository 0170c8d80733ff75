//! Acquaint Graph - Social graph queries
//!
//! This crate owns the in-memory acquaintance graph and the three queries
//! run against it:
//!
//! - [`shortest_chain`]: the fewest-hops chain of friends between two people
//! - [`affiliation_groups`]: friend groups that stay inside one affiliation
//! - [`connectors`]: people whose removal splits the graph apart
//!
//! # Architecture
//!
//! A [`SocialGraph`] is built once, through [`GraphBuilder`] or
//! [`SocialGraph::from_roster`], and never mutated afterwards. Every query
//! borrows it immutably and allocates its own scratch arrays, so one graph
//! can be shared across threads behind an `Arc` and queried concurrently.
//!
//! Adjacency lists keep insertion order. Traversals walk them in that
//! order, which makes tie-breaking between equally short chains and the
//! shape of the DFS trees fully deterministic.
//!
//! # Example
//!
//! ```
//! use acquaint_core::Roster;
//! use acquaint_graph::SocialGraph;
//!
//! let roster = Roster::parse("3\nsam|y|rutgers\njane|y|rutgers\nbob|n\nsam|jane\njane|bob\n").unwrap();
//! let graph = SocialGraph::from_roster(roster).unwrap();
//!
//! assert_eq!(graph.shortest_chain("sam", "bob").unwrap(), ["sam", "jane", "bob"]);
//! assert_eq!(graph.affiliation_groups("rutgers"), vec![vec!["sam", "jane"]]);
//! assert_eq!(graph.connectors(), ["jane"]);
//! ```

mod builder;
mod chain;
mod connectors;
mod error;
mod graph;
mod groups;
mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use chain::shortest_chain;
pub use connectors::connectors;
pub use error::GraphError;
pub use graph::{GraphStats, PersonId, SocialGraph};
pub use groups::affiliation_groups;
pub use store::{read_graph, GraphStore, StoreError};
