//! Single-source shortest path over the layered graph, with a binary heap
//! exactly as a textbook Dijkstra would use one.

use std::{cmp::Ordering, collections::BinaryHeap};

use super::graph::Graph;

/// `f64` wrapper giving a total order for the heap; weights are always
/// finite and non-negative, so `total_cmp` never observes `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MinWeight(f64);

impl Eq for MinWeight {}

impl PartialOrd for MinWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    cost: MinWeight,
    vertex: u32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl Eq for HeapEntry {}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

pub struct ShortestPaths {
    pub distance: Vec<Option<f64>>,
    /// `(from_vertex, edge_id)` of the edge that last improved each vertex.
    pub parent: Vec<Option<(u32, u32)>>,
}

/// Runs Dijkstra from `source`, stopping early once `target` is finalised.
pub fn shortest_path(graph: &Graph, source: u32, target: u32) -> ShortestPaths {
    let mut distance: Vec<Option<f64>> = vec![None; graph.vertex_count];
    let mut parent: Vec<Option<(u32, u32)>> = vec![None; graph.vertex_count];
    let mut visited = vec![false; graph.vertex_count];
    let mut heap = BinaryHeap::new();

    distance[source as usize] = Some(0.0);
    heap.push(HeapEntry {
        cost: MinWeight(0.0),
        vertex: source,
    });

    while let Some(HeapEntry { cost, vertex }) = heap.pop() {
        if visited[vertex as usize] {
            continue;
        }
        visited[vertex as usize] = true;
        if vertex == target {
            break;
        }

        for &edge_id in graph.adjacency[vertex as usize].iter() {
            let edge = &graph.edges[edge_id as usize];
            let next_cost = cost.0 + edge.weight;
            let better = match distance[edge.to as usize] {
                Some(current) => next_cost < current,
                None => true,
            };
            if better {
                distance[edge.to as usize] = Some(next_cost);
                parent[edge.to as usize] = Some((vertex, edge_id));
                heap.push(HeapEntry {
                    cost: MinWeight(next_cost),
                    vertex: edge.to,
                });
            }
        }
    }

    ShortestPaths { distance, parent }
}
