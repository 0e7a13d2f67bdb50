//! The itinerary returned by a route query: a total time and an ordered
//! list of wait/ride items, modeled as a tagged union rather than through
//! inheritance.

use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum RouteItem {
    Wait { stop_name: Arc<str>, time: f64 },
    Bus {
        bus_name: Arc<str>,
        span_count: u32,
        time: f64,
    },
}

#[derive(Debug, Clone)]
pub struct Itinerary {
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}
