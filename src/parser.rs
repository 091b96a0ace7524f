//! A module for building graphs from adjacency-list text.
//!
//! Each line lists a source vertex followed by the vertices it has an edge to, separated by
//! whitespace:
//!
//! ```text
//! Raman Abe Carla
//! Cat Abe
//! ```

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::graph::Graph;

/// The network used by the demo and the scenario tests.
pub const SAMPLE_NETWORK: &str =
    "Raman Abe Carla Anwar Cat\nCat Abe\nCarla Raman Abe\nAbe\nAnwar Abe Carla Raman";

/// A parsed network: the graph and its vertices in the order they were first mentioned.
#[derive(Clone, Debug)]
pub struct Network {
    graph: Graph<String>,
    vertices: Vec<String>,
}

impl Network {
    /// Returns the graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Returns the unique vertices, in first-seen order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Returns the first vertex mentioned in the input, the default root for an analysis.
    pub fn root(&self) -> Option<&String> {
        self.vertices.first()
    }

    /// Consumes the network, returning the graph.
    pub fn into_graph(self) -> Graph<String> {
        self.graph
    }
}

/// Parses adjacency-list text into a [`Network`].
#[derive(Clone, Copy, Debug)]
pub struct NetworkParser<'a> {
    input: &'a str,
}

impl<'a> NetworkParser<'a> {
    /// Creates a parser over the given text.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Builds the network.
    ///
    /// Blank lines are skipped. A line holding a single token adds that vertex without any edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::parser::NetworkParser;
    ///
    /// let network = NetworkParser::new("A B C\nB A\nC A B").parse();
    ///
    /// assert_eq!(network.vertices(), ["A", "B", "C"]);
    /// assert_eq!(network.graph().edge_count(), 5);
    /// ```
    pub fn parse(&self) -> Network {
        let mut graph = Graph::new();
        let mut vertices = Vec::new();
        let mut seen = HashSet::new();

        for (number, line) in self.input.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(source) = tokens.next() else {
                trace!(line = number + 1, "skipping blank line");
                continue;
            };

            let mut record = |token: &str| {
                if seen.insert(token.to_owned()) {
                    vertices.push(token.to_owned());
                }
            };

            record(source);
            graph.add_vertex(source.to_owned());

            for target in tokens {
                record(target);
                graph.add_directed_edge(source.to_owned(), target.to_owned());
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "parsed network"
        );

        Network { graph, vertices }
    }
}
