use std::{env, error::Error, fs};

use follower_net::parser::{NetworkParser, SAMPLE_NETWORK};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Analyse the file given as the first argument, or the bundled sample network.
    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_NETWORK.to_owned(),
    };

    let network = NetworkParser::new(&input).parse();
    let graph = network.graph();

    println!(
        "\nNetwork with {} people and {} follows, density: {:.4}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.density()
    );

    if let Some(top) = graph.in_degree_table().first() {
        println!("Most followed: {} ({})", top.vertex(), top.count());
    }

    if let Some(top) = graph.out_degree_table().first() {
        println!("Follows the most: {} ({})", top.vertex(), top.count());
    }

    let Some(root) = network.root() else {
        println!("Network is empty, nothing to traverse.");
        return Ok(());
    };

    // People reached through exactly two hops of follows.
    let second = graph.distance_set(root, 2)?;
    println!(
        "Two degrees from {root}: {}",
        second.into_iter().collect::<Vec<_>>().join(", ")
    );

    // A post spreads along follower edges, so propagate over the inverted graph. A vertex
    // without edges doesn't survive the inversion.
    let followers = graph.invert();
    let reach = if followers.contains_vertex(root) {
        followers.reachable_subgraph(root)?.vertex_count() - 1
    } else {
        0
    };
    println!("A post by {root} propagates to {reach} people");

    if let Some(top) = graph.most_connected() {
        println!("Most connected: {} (reaches {})", top.vertex(), top.count());
    }

    Ok(())
}
