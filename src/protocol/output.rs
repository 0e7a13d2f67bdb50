//! `serde`-derived shapes of the output document; the mirror of
//! [`super::input`].

use serde::Serialize;

use crate::{
    handler::QueryResult,
    router::{Itinerary, RouteItem},
};

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemDto {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: u32,
        time: f64,
    },
}

impl From<&RouteItem> for RouteItemDto {
    fn from(item: &RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop_name, time } => RouteItemDto::Wait {
                stop_name: stop_name.to_string(),
                time: *time,
            },
            RouteItem::Bus {
                bus_name,
                span_count,
                time,
            } => RouteItemDto::Bus {
                bus: bus_name.to_string(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseDto {
    Bus {
        request_id: i64,
        stop_count: usize,
        unique_stop_count: usize,
        route_length: u32,
        curvature: f64,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItemDto>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl From<&QueryResult> for ResponseDto {
    fn from(result: &QueryResult) -> Self {
        match result {
            QueryResult::Bus { id, stats } => ResponseDto::Bus {
                request_id: *id,
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
                route_length: stats.route_length,
                curvature: stats.curvature,
            },
            QueryResult::Stop { id, buses } => ResponseDto::Stop {
                request_id: *id,
                buses: buses.iter().map(|name| name.to_string()).collect(),
            },
            QueryResult::Map { id, document } => ResponseDto::Map {
                request_id: *id,
                map: document.clone(),
            },
            QueryResult::Route { id, itinerary } => ResponseDto::Route {
                request_id: *id,
                total_time: route_total_time(itinerary),
                items: itinerary.items.iter().map(RouteItemDto::from).collect(),
            },
            QueryResult::NotFound { id } => ResponseDto::Error {
                request_id: *id,
                error_message: "not found".to_string(),
            },
        }
    }
}

fn route_total_time(itinerary: &Itinerary) -> f64 {
    itinerary.total_time
}
