//! Follower-net is a small toolkit for analysing directed "who-follows-whom" networks, though it
//! can also apply more generally to any directed graph.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure which can be constructed
//! edge by edge or parsed from adjacency-list text with the
//! [`NetworkParser`](parser::NetworkParser). Once constructed, density, ranked degree tables,
//! bounded-hop reachability and propagation reach can be computed.
//!
//! ```rust
//! use follower_net::degree::Degree;
//! use follower_net::parser::NetworkParser;
//!
//! // Each line lists a vertex followed by the vertices it follows.
//! let network = NetworkParser::new("A B C\nB A\nC A B").parse();
//! let graph = network.graph();
//!
//! // Compute some metrics on the graph.
//! assert_eq!(graph.edge_count(), 5);
//! assert_eq!(graph.density(), 5.0 / 6.0);
//!
//! // Ranked tables put the highest count first, ties go to the smallest key.
//! let followed = graph.in_degree_table();
//! assert_eq!(followed[0], Degree::new("A".to_owned(), 2));
//!
//! // The propagation tree rooted at "A" reaches both other vertices.
//! let tree = graph.reachable_subgraph(&"A".to_owned()).unwrap();
//! assert_eq!(tree.vertex_count() - 1, 2);
//! ```

pub mod degree;
pub mod error;
pub mod graph;
pub mod parser;
mod traversal;

pub use error::{GraphError, Result};
