//! A module for breadth-first traversals over directed graphs.
//!
//! Every reachability query in the crate is derived from [`breadth_first`]: the bounded distance
//! sets, the discovery-edge subgraph and the reach counts used for ranking.

use std::{
    collections::{HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

use itertools::Itertools;
use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// Progress is logged every time this many roots have been traversed.
const PROGRESS_INTERVAL: usize = 100;

/// Walks the graph breadth-first from `root`, calling `discover(parent, vertex, depth)` the first
/// time each vertex is reached.
///
/// Neighbours are visited in ascending order so the discovery tree is reproducible when several
/// shortest paths exist. A vertex is never queued twice, which makes the reported depth its
/// shortest-hop distance from `root`. The root is marked as visited up front and is never
/// reported, even when a cycle leads back to it. Vertices at `max_depth` are reported but not
/// expanded.
pub(crate) fn breadth_first<'a, T, F>(
    graph: &'a Graph<T>,
    root: &'a T,
    max_depth: Option<usize>,
    mut discover: F,
) where
    T: Clone + Eq + Hash + Ord + Debug,
    F: FnMut(&'a T, &'a T, usize),
{
    let mut visited: HashSet<&T> = HashSet::new();
    let mut queue: VecDeque<(&T, usize)> = VecDeque::new();

    visited.insert(root);
    queue.push_back((root, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for next in graph.neighbours(current).iter().sorted() {
            if visited.insert(next) {
                discover(current, next, depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }
}

/// Counts the vertices reachable from `root`, excluding the root itself.
pub(crate) fn reach_count<T>(graph: &Graph<T>, root: &T) -> usize
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    let mut count = 0;
    breadth_first(graph, root, None, |_, _, _| count += 1);

    count
}

/// Computes the reach of every vertex in the graph, one full traversal per root.
///
/// When an `abort` flag is supplied it is checked before each traversal and the computation stops
/// with [`GraphError::Aborted`] once it is set.
pub(crate) fn compute_reach<T>(
    graph: &Graph<T>,
    abort: Option<&AtomicBool>,
) -> Result<Vec<(T, usize)>>
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    let start = Instant::now();
    let num_vertices = graph.vertex_count();
    debug!(num_vertices, "compute_reach: starting");

    let mut counts = Vec::with_capacity(num_vertices);

    for (i, root) in graph.keys().enumerate() {
        if abort.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            debug!(completed = i, elapsed = ?start.elapsed(), "compute_reach: aborted");
            return Err(GraphError::Aborted);
        }

        if i % PROGRESS_INTERVAL == 0 {
            debug!(vertex = i, elapsed = ?start.elapsed(), "compute_reach: progress");
        }

        counts.push((root.clone(), reach_count(graph, root)));
    }

    debug!(elapsed = ?start.elapsed(), "compute_reach: done");

    Ok(counts)
}
