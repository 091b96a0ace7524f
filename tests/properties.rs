//! Property tests for counting, ranking, inversion and distance invariants.

use std::collections::{BTreeSet, HashMap};

use follower_net::{degree::Degree, graph::Graph, parser::NetworkParser};
use itertools::Itertools;
use proptest::prelude::*;

fn build(edges: &[(u8, u8)], isolated: &[u8]) -> Graph<u8> {
    let mut graph = Graph::new();
    for &(from, to) in edges {
        graph.add_directed_edge(from, to);
    }
    for &vertex in isolated {
        graph.add_vertex(vertex);
    }

    graph
}

fn edge_multiset(graph: &Graph<u8>) -> Vec<(u8, u8)> {
    graph.edges().map(|(a, b)| (*a, *b)).sorted().collect()
}

fn is_ranked(table: &[Degree<u8>]) -> bool {
    table.windows(2).all(|pair| {
        pair[0].count() > pair[1].count()
            || (pair[0].count() == pair[1].count() && pair[0].vertex() < pair[1].vertex())
    })
}

fn edge_lists() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..48)
}

fn isolated_vertices() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(12u8..16, 0..4)
}

fn network_lines() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-e]", 1..5), 0..8)
}

proptest! {
    #[test]
    fn counts_match_adjacency(edges in edge_lists(), isolated in isolated_vertices()) {
        let graph = build(&edges, &isolated);

        let summed: usize = graph.keys().map(|k| graph.get(k).unwrap().len()).sum();
        prop_assert_eq!(graph.edge_count(), summed);
        prop_assert_eq!(graph.edge_count(), edges.len());
        prop_assert_eq!(graph.vertex_count(), graph.keys().count());
    }

    #[test]
    fn double_inversion_preserves_edges(edges in edge_lists(), isolated in isolated_vertices()) {
        let graph = build(&edges, &isolated);

        prop_assert_eq!(edge_multiset(&graph.invert().invert()), edge_multiset(&graph));
    }

    #[test]
    fn tables_are_ranked(edges in edge_lists(), isolated in isolated_vertices()) {
        let graph = build(&edges, &isolated);

        prop_assert!(is_ranked(&graph.out_degree_table()));
        prop_assert!(is_ranked(&graph.in_degree_table()));
        prop_assert!(is_ranked(&graph.reachability_table()));
    }

    #[test]
    fn out_degrees_match_adjacency(edges in edge_lists(), isolated in isolated_vertices()) {
        let graph = build(&edges, &isolated);

        let mut derived: HashMap<u8, usize> = HashMap::new();
        for vertex in graph.keys() {
            derived.insert(*vertex, graph.get(vertex).unwrap().len());
        }

        let table: HashMap<u8, usize> = graph
            .out_degree_table()
            .into_iter()
            .map(Degree::into_inner)
            .collect();
        prop_assert_eq!(table, derived);
    }

    #[test]
    fn in_degrees_omit_unfollowed(edges in edge_lists(), isolated in isolated_vertices()) {
        let graph = build(&edges, &isolated);
        let targets: BTreeSet<u8> = edges.iter().map(|(_, to)| *to).collect();

        let table = graph.in_degree_table();
        prop_assert!(table.iter().all(|degree| degree.count() > 0));
        prop_assert_eq!(table.iter().map(|d| *d.vertex()).collect::<BTreeSet<_>>(), targets);
        prop_assert_eq!(table.iter().map(Degree::count).sum::<usize>(), edges.len());
    }

    #[test]
    fn distance_sets_are_disjoint(edges in edge_lists(), root in 0u8..12) {
        let graph = build(&edges, &[root]);

        prop_assert!(graph.distance_set(&root, 0).unwrap().is_empty());

        let mut seen = BTreeSet::new();
        for degrees in 1..=12 {
            let set = graph.distance_set(&root, degrees).unwrap();
            prop_assert!(!set.contains(&root));
            prop_assert!(set.is_disjoint(&seen));
            seen.extend(set);
        }

        // Every reachable vertex is at some finite distance.
        prop_assert_eq!(seen.len(), graph.reach(&root).unwrap());
    }

    #[test]
    fn reachable_subgraph_is_a_tree(edges in edge_lists(), root in 0u8..12) {
        let graph = build(&edges, &[root]);
        let subgraph = graph.reachable_subgraph(&root).unwrap();

        // A tree over n vertices has n - 1 edges, one into each non-root vertex.
        prop_assert_eq!(subgraph.edge_count(), subgraph.vertex_count() - 1);
        prop_assert_eq!(subgraph.vertex_count() - 1, graph.reach(&root).unwrap());
        prop_assert!(subgraph.in_degree_table().iter().all(|d| d.count() == 1));
        prop_assert!(subgraph.in_degree_table().iter().all(|d| d.vertex() != &root));
    }

    #[test]
    fn most_connected_tops_the_table(edges in edge_lists(), isolated in isolated_vertices()) {
        let graph = build(&edges, &isolated);
        let table = graph.reachability_table();

        prop_assert_eq!(graph.most_connected(), table.first().cloned());
        for degree in &table {
            prop_assert_eq!(graph.reach(degree.vertex()).unwrap(), degree.count());
        }
    }

    #[test]
    fn parsed_lines_round_trip(lines in network_lines()) {
        let input = lines.iter().map(|tokens| tokens.join(" ")).join("\n");
        let network = NetworkParser::new(&input).parse();

        let expected_edges: usize = lines.iter().map(|tokens| tokens.len() - 1).sum();
        prop_assert_eq!(network.graph().edge_count(), expected_edges);

        // The first-seen list is exactly the vertex set, without duplicates.
        let unique: BTreeSet<&String> = network.vertices().iter().collect();
        prop_assert_eq!(unique.len(), network.vertices().len());
        prop_assert_eq!(network.vertices().len(), network.graph().vertex_count());
    }
}
