//! Thin facade composing the catalogue, router, and renderer into answers
//! for each of the four query kinds; every not-found case is ordinary data,
//! never a propagated error.

use std::sync::Arc;

use tracing::warn;

use crate::{
    catalogue::Catalogue,
    render::Renderer,
    router::{Itinerary, Router},
};

#[derive(Debug, Clone)]
pub enum Query {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

#[derive(Debug, Clone)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: u32,
    pub curvature: f64,
}

#[derive(Debug, Clone)]
pub enum QueryResult {
    Bus { id: i64, stats: BusStats },
    Stop { id: i64, buses: Vec<Arc<str>> },
    Map { id: i64, document: String },
    Route { id: i64, itinerary: Itinerary },
    NotFound { id: i64 },
}

pub struct Handler<'a> {
    catalogue: &'a Catalogue,
    router: &'a Router<'a>,
    renderer: &'a Renderer,
}

impl<'a> Handler<'a> {
    pub fn new(catalogue: &'a Catalogue, router: &'a Router<'a>, renderer: &'a Renderer) -> Self {
        Self {
            catalogue,
            router,
            renderer,
        }
    }

    pub fn handle(&self, query: &Query) -> QueryResult {
        match query {
            Query::Bus { id, name } => self.handle_bus(*id, name),
            Query::Stop { id, name } => self.handle_stop(*id, name),
            Query::Map { id } => QueryResult::Map {
                id: *id,
                document: self.renderer.render(self.catalogue),
            },
            Query::Route { id, from, to } => self.handle_route(*id, from, to),
        }
    }

    fn handle_bus(&self, id: i64, name: &str) -> QueryResult {
        let Some(bus) = self.catalogue.get_bus(name) else {
            return QueryResult::NotFound { id };
        };

        let unique_stop_count = {
            let mut seen: Vec<u32> = Vec::new();
            for &stop in bus.stops.iter() {
                if !seen.contains(&stop) {
                    seen.push(stop);
                }
            }
            seen.len()
        };

        let mut route_length: u32 = 0;
        let mut geodesic_length: f64 = 0.0;
        for window in bus.stops.windows(2) {
            let (a, b) = (window[0], window[1]);
            route_length += self
                .catalogue
                .distance(a, b)
                .expect("adjacent distance validated at load time");
            let coord_a = self.catalogue.stop_by_index(a).coordinate;
            let coord_b = self.catalogue.stop_by_index(b).coordinate;
            geodesic_length += coord_a.distance(&coord_b);
        }

        let curvature = if geodesic_length > 0.0 {
            route_length as f64 / geodesic_length
        } else {
            1.0
        };

        QueryResult::Bus {
            id,
            stats: BusStats {
                stop_count: bus.stop_count(),
                unique_stop_count,
                route_length,
                curvature,
            },
        }
    }

    fn handle_stop(&self, id: i64, name: &str) -> QueryResult {
        match self.catalogue.buses_through(name) {
            Some(buses) => QueryResult::Stop {
                id,
                buses: buses.into_iter().map(Arc::from).collect(),
            },
            None => QueryResult::NotFound { id },
        }
    }

    fn handle_route(&self, id: i64, from: &str, to: &str) -> QueryResult {
        match self.router.route(from, to) {
            Some(itinerary) => QueryResult::Route { id, itinerary },
            None => QueryResult::NotFound { id },
        }
    }
}

/// Logs and converts an unrecognised `stat_requests` entry `type` into a
/// not-found result rather than rejecting the whole input document.
pub fn unknown_request_type(id: i64, type_name: &str) -> QueryResult {
    warn!(type_name, "unknown stat_requests type");
    QueryResult::NotFound { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geo::Coordinate, render::RenderSettings, router::RoutingSettings};

    fn render_settings() -> RenderSettings {
        RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: (7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: (7.0, -3.0),
            underlayer_color: crate::render::Color::Named("white".to_string()),
            underlayer_width: 3.0,
            color_palette: vec![crate::render::Color::Named("red".to_string())],
        }
    }

    fn routing_settings() -> RoutingSettings {
        RoutingSettings {
            bus_wait_time: 6.0,
            bus_velocity_kmh: 60.0,
        }
    }

    fn abc_catalogue() -> Catalogue {
        let mut cat = Catalogue::new();
        cat.add_stop("A", Coordinate::new(55.0, 37.0)).unwrap();
        cat.add_stop("B", Coordinate::new(55.0, 37.1)).unwrap();
        cat.set_distance("A", "B", 1000).unwrap();
        cat.set_distance("B", "A", 900).unwrap();
        cat.add_bus("1", &["A".to_string(), "B".to_string()], false)
            .unwrap();
        cat
    }

    #[test]
    fn bus_query_matches_worked_example() {
        let cat = abc_catalogue();
        let router = Router::new(&cat, routing_settings());
        let renderer = Renderer::new(render_settings());
        let handler = Handler::new(&cat, &router, &renderer);
        let result = handler.handle(&Query::Bus {
            id: 1,
            name: "1".to_string(),
        });
        match result {
            QueryResult::Bus { stats, .. } => {
                assert_eq!(stats.stop_count, 3);
                assert_eq!(stats.unique_stop_count, 2);
                assert_eq!(stats.route_length, 1900);
                assert!(stats.curvature > 1.0);
            }
            _ => panic!("expected a bus result"),
        }
    }

    #[test]
    fn unknown_bus_is_not_found() {
        let cat = abc_catalogue();
        let router = Router::new(&cat, routing_settings());
        let renderer = Renderer::new(render_settings());
        let handler = Handler::new(&cat, &router, &renderer);
        let result = handler.handle(&Query::Bus {
            id: 1,
            name: "Z".to_string(),
        });
        assert!(matches!(result, QueryResult::NotFound { id: 1 }));
    }

    #[test]
    fn stop_query_lists_sorted_bus_names() {
        let cat = abc_catalogue();
        let router = Router::new(&cat, routing_settings());
        let renderer = Renderer::new(render_settings());
        let handler = Handler::new(&cat, &router, &renderer);
        let result = handler.handle(&Query::Stop {
            id: 2,
            name: "A".to_string(),
        });
        match result {
            QueryResult::Stop { buses, .. } => {
                assert_eq!(buses.len(), 1);
                assert_eq!(buses[0].as_ref(), "1");
            }
            _ => panic!("expected a stop result"),
        }
    }

    #[test]
    fn map_query_returns_an_svg_document() {
        let cat = abc_catalogue();
        let router = Router::new(&cat, routing_settings());
        let renderer = Renderer::new(render_settings());
        let handler = Handler::new(&cat, &router, &renderer);
        let result = handler.handle(&Query::Map { id: 3 });
        match result {
            QueryResult::Map { document, .. } => assert!(document.contains("<svg")),
            _ => panic!("expected a map result"),
        }
    }

    #[test]
    fn route_query_delegates_to_the_router() {
        let cat = abc_catalogue();
        let router = Router::new(&cat, routing_settings());
        let renderer = Renderer::new(render_settings());
        let handler = Handler::new(&cat, &router, &renderer);
        let result = handler.handle(&Query::Route {
            id: 4,
            from: "A".to_string(),
            to: "A".to_string(),
        });
        match result {
            QueryResult::Route { itinerary, .. } => assert_eq!(itinerary.total_time, 0.0),
            _ => panic!("expected a route result"),
        }
    }
}
