//! Degrees-of-separation demo over a small social network.
//!
//! Builds the eight-user sample network, ranks everyone by degree
//! centrality, then answers a handful of shortest-path queries.
//!
//! Run with: `cargo run --example degrees_of_separation`

use sociograph_core::NodeId;
use sociograph_graph::analytics::DegreeCentrality;
use sociograph_graph::store::{GraphResult, SocialGraph};
use sociograph_graph::traversal::{PathResult, ShortestPath};

fn main() -> GraphResult<()> {
    tracing_subscriber::fmt::init();

    let mut network = SocialGraph::new([
        "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi",
    ])?;

    // Directed relationships ("follows")
    let relationships = [
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (3, 0),
        (3, 5),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 6),
        (2, 4),
    ];
    for (source, target) in relationships {
        network.add_edge(NodeId::new(source), NodeId::new(target))?;
    }

    print_centrality(&network);

    for (source, target) in [(0, 5), (3, 7), (0, 0), (7, 0)] {
        print_path(&network, NodeId::new(source), NodeId::new(target))?;
    }

    Ok(())
}

fn name(network: &SocialGraph, id: NodeId) -> &str {
    network.user(id).map(|user| user.name.as_str()).unwrap_or("?")
}

fn print_centrality(network: &SocialGraph) {
    let centrality = DegreeCentrality::compute(network);

    println!("--- degree centrality ---");
    println!("{:<10} {:>4} {:>4} {:>6}", "user", "in", "out", "total");
    for entry in &centrality.entries {
        println!(
            "{:<10} {:>4} {:>4} {:>6}",
            name(network, entry.node),
            entry.in_degree,
            entry.out_degree,
            entry.total()
        );
    }

    if let Some(top) = centrality.most_influential {
        let total = centrality.entry(top).map(|entry| entry.total()).unwrap_or(0);
        println!("most influential: {} (total degree {total})", name(network, top));
    }
    println!();
}

fn print_path(network: &SocialGraph, source: NodeId, target: NodeId) -> GraphResult<()> {
    match ShortestPath::find_path(network, source, target)? {
        PathResult::SameNode(node) => {
            println!("{}: start and target are the same", name(network, node));
        }
        PathResult::Found(path) => {
            let route: Vec<&str> = path.nodes.iter().map(|&id| name(network, id)).collect();
            println!(
                "{} -> {}: {} degrees of separation ({})",
                name(network, source),
                name(network, target),
                path.distance,
                route.join(" -> ")
            );
        }
        PathResult::NotFound => {
            println!("no path from {} to {}", name(network, source), name(network, target));
        }
    }
    Ok(())
}
