//! A module for working with directed graphs.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
    sync::atomic::AtomicBool,
};

use itertools::Itertools;
use nalgebra::DMatrix;

use crate::{
    degree::{ranked, Degree},
    error::{GraphError, Result},
    traversal::{self, breadth_first},
};

/// A directed graph, stored as a mapping of each vertex to its outgoing edges.
///
/// Parallel edges are kept and the insertion order of each vertex's edges is preserved. Every
/// endpoint of an edge is a vertex of the graph, even when it has no outgoing edges of its own.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph<T> {
    /// The outgoing edges of each vertex.
    adjacency: HashMap<T, Vec<T>>,
}

impl<T> Default for Graph<T>
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::graph::Graph;
    ///
    /// let graph: Graph<&str> = Graph::new();
    /// ```
    pub fn new() -> Self {
        Self {
            adjacency: Default::default(),
        }
    }

    /// Inserts a vertex with no outgoing edges and returns whether it was absent.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.adjacency.insert(vertex, Vec::new());

        true
    }

    /// Inserts the edge `from -> to`, creating either vertex if it doesn't exist yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edge("a", "b");
    /// graph.add_directed_edge("a", "b");
    ///
    /// // Parallel edges are preserved.
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.vertex_count(), 2);
    /// ```
    pub fn add_directed_edge(&mut self, from: T, to: T) {
        self.add_vertex(to.clone());
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Inserts a `from -> to` edge for each of the targets, in order.
    pub fn add_directed_edges<I>(&mut self, from: T, targets: I)
    where
        I: IntoIterator<Item = T>,
    {
        for to in targets {
            self.add_directed_edge(from.clone(), to);
        }
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the edge count of the graph, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// directed edges, `|E| / (|V| * (|V| - 1))`.
    ///
    /// The division isn't guarded: a graph with fewer than two vertices yields `NaN` (or infinity
    /// for a single vertex with a self-loop). Use [`Graph::try_density`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// assert!(graph.density().is_nan());
    ///
    /// graph.add_directed_edge("a", "b");
    /// assert_eq!(graph.density(), 0.5);
    ///
    /// graph.add_directed_edge("b", "a");
    /// assert_eq!(graph.density(), 1.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        ec / (vc * (vc - 1.0))
    }

    /// Computes the density of the graph, failing when it has fewer than two vertices.
    pub fn try_density(&self) -> Result<f64> {
        let vertices = self.vertex_count();
        if vertices <= 1 {
            return Err(GraphError::DegenerateInput { vertices });
        }

        Ok(self.density())
    }

    /// Returns the targets of the outgoing edges of `vertex`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edges("a", ["c", "b"]);
    ///
    /// assert_eq!(graph.get(&"a").unwrap(), &["c", "b"]);
    /// assert!(graph.get(&"b").unwrap().is_empty());
    /// assert!(graph.get(&"d").is_err());
    /// ```
    pub fn get(&self, vertex: &T) -> Result<&[T]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| not_found(vertex))
    }

    /// Checks if the graph contains a vertex.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns an iterator over the vertices, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.keys()
    }

    /// Returns an iterator over the `(from, to)` edges. Sources come in no particular order, the
    /// edges of a single source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    /// Returns a mapping of vertices to their position in `T`'s order, as used by the matrix
    /// representations.
    pub fn index(&self) -> BTreeMap<T, usize> {
        self.adjacency
            .keys()
            .sorted()
            .enumerate()
            .map(|(i, vertex)| (vertex.clone(), i))
            .collect()
    }

    /// Constructs the adjacency matrix for this graph.
    ///
    /// Rows and columns follow [`Graph::index`]; entry `(i, j)` is the number of `i -> j` edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use follower_net::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edge("a", "b");
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              0.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let index = self.index();
        let n = index.len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (from, to) in self.edges() {
            // Both endpoints are keys, so both are indexed.
            if let (Some(&i), Some(&j)) = (index.get(from), index.get(to)) {
                matrix[(i, j)] += 1.0;
            }
        }

        matrix
    }

    /// Returns the out-degree of every vertex, ranked by count descending then vertex ascending.
    ///
    /// Vertices without outgoing edges are included with a count of 0.
    pub fn out_degree_table(&self) -> Vec<Degree<T>> {
        ranked(
            self.adjacency
                .iter()
                .map(|(vertex, targets)| (vertex.clone(), targets.len())),
        )
    }

    /// Returns the in-degree of every vertex that is the target of at least one edge, ranked by
    /// count descending then vertex ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::degree::Degree;
    /// use follower_net::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edges("a", ["b", "c"]);
    /// graph.add_directed_edge("b", "c");
    ///
    /// assert_eq!(
    ///     graph.in_degree_table(),
    ///     vec![Degree::new("c", 2), Degree::new("b", 1)]
    /// );
    /// ```
    pub fn in_degree_table(&self) -> Vec<Degree<T>> {
        let mut counts: HashMap<&T, usize> = HashMap::new();
        for (_, to) in self.edges() {
            *counts.entry(to).or_default() += 1;
        }

        ranked(
            counts
                .into_iter()
                .map(|(vertex, count)| (vertex.clone(), count)),
        )
    }

    /// Returns a new graph with every edge reversed.
    ///
    /// Vertices are only carried over through their edges: a vertex with neither incoming nor
    /// outgoing edges doesn't appear in the inverted graph.
    pub fn invert(&self) -> Self {
        let mut inverted = Self::new();
        for from in self.adjacency.keys().sorted() {
            for to in &self.adjacency[from] {
                inverted.add_directed_edge(to.clone(), from.clone());
            }
        }

        inverted
    }

    /// Returns the vertices whose shortest-hop distance from `source` is exactly `degrees`.
    ///
    /// The source itself is never part of the set, so a distance of 0 yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use follower_net::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edges("a", ["b", "c"]);
    /// graph.add_directed_edge("b", "d");
    /// graph.add_directed_edge("c", "a");
    ///
    /// assert_eq!(graph.distance_set(&"a", 1).unwrap(), BTreeSet::from(["b", "c"]));
    /// assert_eq!(graph.distance_set(&"a", 2).unwrap(), BTreeSet::from(["d"]));
    /// ```
    pub fn distance_set(&self, source: &T, degrees: usize) -> Result<BTreeSet<T>> {
        let root = self.vertex(source)?;

        let mut vertices = BTreeSet::new();
        breadth_first(self, root, Some(degrees), |_, vertex, depth| {
            if depth == degrees {
                vertices.insert(vertex.clone());
            }
        });

        Ok(vertices)
    }

    /// Returns the subgraph of discovery edges of a breadth-first traversal from `source`.
    ///
    /// Each reachable vertex appears with exactly one incoming edge, from the vertex it was first
    /// reached through; neighbours are explored in ascending order. The source is always a vertex
    /// of the result, so the reach of the source is `vertex_count() - 1`.
    pub fn reachable_subgraph(&self, source: &T) -> Result<Self> {
        let root = self.vertex(source)?;

        let mut subgraph = Self::new();
        subgraph.add_vertex(root.clone());
        breadth_first(self, root, None, |parent, vertex, _| {
            subgraph.add_directed_edge(parent.clone(), vertex.clone())
        });

        Ok(subgraph)
    }

    /// Returns the number of vertices reachable from `source`, excluding the source itself.
    pub fn reach(&self, source: &T) -> Result<usize> {
        let root = self.vertex(source)?;

        Ok(traversal::reach_count(self, root))
    }

    /// Returns the reach of every vertex, ranked by count descending then vertex ascending.
    ///
    /// This runs a full traversal rooted at each vertex, `O(V * (V + E))`.
    pub fn reachability_table(&self) -> Vec<Degree<T>> {
        match traversal::compute_reach(self, None) {
            Ok(counts) => ranked(counts),
            // Without an abort flag the computation always completes.
            Err(_) => Vec::new(),
        }
    }

    /// Returns the vertex with the largest reach, ties going to the smallest vertex. Returns
    /// `None` for an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::{degree::Degree, graph::Graph};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edge("a", "b");
    /// graph.add_directed_edge("b", "c");
    /// graph.add_directed_edge("c", "d");
    ///
    /// assert_eq!(graph.most_connected(), Some(Degree::new("a", 3)));
    /// ```
    pub fn most_connected(&self) -> Option<Degree<T>> {
        self.reachability_table().into_iter().next()
    }

    /// Like [`Graph::most_connected`], checking `abort` between traversals and failing with
    /// [`GraphError::Aborted`] once it's set.
    pub fn most_connected_with_abort(&self, abort: &AtomicBool) -> Result<Option<Degree<T>>> {
        let counts = traversal::compute_reach(self, Some(abort))?;

        Ok(ranked(counts).into_iter().next())
    }

    //
    // Private
    //

    /// Returns the outgoing edges of `vertex`, or none if it isn't a key.
    pub(crate) fn neighbours(&self, vertex: &T) -> &[T] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the graph's own copy of the key, borrowed for the lifetime of the graph.
    fn vertex(&self, vertex: &T) -> Result<&T> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(key, _)| key)
            .ok_or_else(|| not_found(vertex))
    }
}

//
// Helpers
//

fn not_found<T: Debug>(vertex: &T) -> GraphError {
    GraphError::VertexNotFound(format!("{vertex:?}"))
}
