//! Shortest-time routing: builds the layered wait/ride graph once from a
//! [`Catalogue`] and answers point-to-point queries with Dijkstra.

mod dijkstra;
pub mod graph;
mod itinerary;

pub use itinerary::{Itinerary, RouteItem};

use std::time::Instant;

use tracing::debug;

use graph::{EdgeKind, Graph};

use crate::catalogue::Catalogue;

/// `bus_wait_time` (minutes) and `bus_velocity` (km/h) from the input document.
#[derive(Debug, Clone, Copy)]
pub struct RoutingSettings {
    pub bus_wait_time: f64,
    pub bus_velocity_kmh: f64,
}

/// Owns the graph and its auxiliary tables; constructed once and immutable
/// thereafter, mirroring the catalogue's own construct-then-freeze lifecycle.
pub struct Router<'a> {
    catalogue: &'a Catalogue,
    graph: Graph,
}

impl<'a> Router<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Self {
        let start = Instant::now();
        let graph = Graph::build(catalogue, settings.bus_wait_time, settings.bus_velocity_kmh);
        debug!(
            vertices = graph.vertex_count,
            edges = graph.edges.len(),
            elapsed = ?start.elapsed(),
            "router graph built"
        );
        Self { catalogue, graph }
    }

    /// `None` means "not found": an unknown stop name or a genuinely
    /// disconnected destination.
    pub fn route(&self, from_name: &str, to_name: &str) -> Option<Itinerary> {
        let from = self.catalogue.get_stop(from_name)?.index;
        let to = self.catalogue.get_stop(to_name)?.index;

        if from == to {
            return Some(Itinerary {
                total_time: 0.0,
                items: Vec::new(),
            });
        }

        let stop_count = self.catalogue.stop_count();
        let source = Graph::wait_vertex(stop_count, from);
        let target = Graph::wait_vertex(stop_count, to);

        let paths = dijkstra::shortest_path(&self.graph, source, target);
        let total_time = paths.distance[target as usize]?;

        let mut edge_chain = Vec::new();
        let mut current = target;
        while current != source {
            let (prev, edge_id) = paths.parent[current as usize]
                .expect("reachable vertex must have a recorded parent");
            edge_chain.push(edge_id);
            current = prev;
        }
        edge_chain.reverse();

        let items = edge_chain
            .into_iter()
            .map(|edge_id| self.expand_edge(edge_id))
            .collect();

        Some(Itinerary { total_time, items })
    }

    fn expand_edge(&self, edge_id: u32) -> RouteItem {
        let edge = &self.graph.edges[edge_id as usize];
        match edge.kind {
            EdgeKind::Wait { stop_index } => RouteItem::Wait {
                stop_name: self.catalogue.stop_by_index(stop_index).name.clone(),
                time: edge.weight,
            },
            EdgeKind::Ride {
                bus_index,
                span_count,
            } => RouteItem::Bus {
                bus_name: self.catalogue.bus_by_index(bus_index).name.clone(),
                span_count,
                time: edge.weight,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn build_abc_catalogue() -> Catalogue {
        let mut cat = Catalogue::new();
        cat.add_stop("A", Coordinate::new(55.0, 37.0)).unwrap();
        cat.add_stop("B", Coordinate::new(55.0, 37.01)).unwrap();
        cat.add_stop("C", Coordinate::new(55.0, 37.02)).unwrap();
        cat.set_distance("A", "B", 1000).unwrap();
        cat.set_distance("B", "A", 1000).unwrap();
        cat.set_distance("B", "C", 1000).unwrap();
        cat.set_distance("C", "B", 1000).unwrap();
        cat.add_bus("X", &["A".to_string(), "B".to_string()], false)
            .unwrap();
        cat.add_bus("Y", &["B".to_string(), "C".to_string()], false)
            .unwrap();
        cat
    }

    fn settings() -> RoutingSettings {
        RoutingSettings {
            bus_wait_time: 6.0,
            bus_velocity_kmh: 60.0,
        }
    }

    #[test]
    fn route_with_transfer_matches_worked_example() {
        let cat = build_abc_catalogue();
        let router = Router::new(&cat, settings());
        let itinerary = router.route("A", "C").unwrap();
        assert!((itinerary.total_time - 14.0).abs() < 1e-9);
        assert_eq!(itinerary.items.len(), 4);
        assert!(matches!(itinerary.items[0], RouteItem::Wait { .. }));
        match &itinerary.items[1] {
            RouteItem::Bus {
                bus_name,
                span_count,
                ..
            } => {
                assert_eq!(bus_name.as_ref(), "X");
                assert_eq!(*span_count, 1);
            }
            _ => panic!("expected a bus item"),
        }
        assert!(matches!(itinerary.items[2], RouteItem::Wait { .. }));
    }

    #[test]
    fn route_same_stop_is_zero_with_no_items() {
        let cat = build_abc_catalogue();
        let router = Router::new(&cat, settings());
        let itinerary = router.route("A", "A").unwrap();
        assert_eq!(itinerary.total_time, 0.0);
        assert!(itinerary.items.is_empty());
    }

    #[test]
    fn unknown_stop_is_not_found() {
        let cat = build_abc_catalogue();
        let router = Router::new(&cat, settings());
        assert!(router.route("A", "Ghost").is_none());
    }

    #[test]
    fn disconnected_destination_is_not_found() {
        let mut cat = build_abc_catalogue();
        cat.add_stop("D", Coordinate::new(60.0, 10.0)).unwrap();
        let router = Router::new(&cat, settings());
        assert!(router.route("A", "D").is_none());
    }

    #[test]
    fn every_bus_item_is_preceded_by_a_wait_at_the_same_stop() {
        let cat = build_abc_catalogue();
        let router = Router::new(&cat, settings());
        let itinerary = router.route("A", "C").unwrap();
        assert!(matches!(itinerary.items[0], RouteItem::Wait { .. }));
        for window in itinerary.items.windows(2) {
            if let RouteItem::Bus { .. } = &window[1] {
                assert!(matches!(window[0], RouteItem::Wait { .. }));
            }
        }
    }

    #[test]
    fn total_time_equals_sum_of_item_times() {
        let cat = build_abc_catalogue();
        let router = Router::new(&cat, settings());
        let itinerary = router.route("A", "C").unwrap();
        let sum: f64 = itinerary
            .items
            .iter()
            .map(|item| match item {
                RouteItem::Wait { time, .. } => *time,
                RouteItem::Bus { time, .. } => *time,
            })
            .sum();
        assert!((sum - itinerary.total_time).abs() < 1e-9);
    }

    #[test]
    fn asymmetric_distance_makes_routing_direction_sensitive() {
        let mut cat = Catalogue::new();
        cat.add_stop("A", Coordinate::new(0.0, 0.0)).unwrap();
        cat.add_stop("B", Coordinate::new(0.0, 1.0)).unwrap();
        cat.set_distance("A", "B", 2000).unwrap();
        cat.add_bus("1", &["A".to_string(), "B".to_string()], false)
            .unwrap();
        let router = Router::new(&cat, settings());
        let forward = router.route("A", "B").unwrap();
        let backward = router.route("B", "A").unwrap();
        // Same declared distance is used both ways via fallback, so the
        // ride time is identical even though only one direction was declared.
        assert!((forward.total_time - backward.total_time).abs() < 1e-9);
    }
}
