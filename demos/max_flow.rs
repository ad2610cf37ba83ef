//! Prints a sample capacity matrix and answers two multi-terminal max-flow queries.

use cgraphs::{algo::*, prelude::*};

fn main() {
    let graph = CapacityMatrix::from_rows(vec![
        vec![0, 0, 6, 4, 0, 0],
        vec![0, 0, 2, 5, 0, 0],
        vec![0, 0, 0, 0, 6, 6],
        vec![0, 0, 0, 0, 4, 4],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ])
    .expect("the sample matrix is well-formed");

    println!("Graph: G[u][v] = capacity");
    for u in graph.vertices() {
        let row: String = graph
            .vertices()
            .map(|v| format!("{:6}", graph.capacity(u, v)))
            .collect();
        println!("{row}");
    }

    for (sources, sinks) in [(vec![0, 1], vec![4, 5]), (vec![1], vec![3, 5])] {
        let max_flow = graph
            .max_flow(sources.iter().copied(), sinks.iter().copied())
            .expect("all sample terminals are in range");
        println!("Sources: {sources:?}; Sinks: {sinks:?}; Max flow: {max_flow}");
    }
}
