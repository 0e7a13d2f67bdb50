//! Offline transport-catalogue query engine: stop/bus indexing, shortest-time
//! routing, and SVG map rendering over a static JSON network description.

pub mod catalogue;
pub mod error;
pub mod geo;
pub mod handler;
pub mod protocol;
pub mod render;
pub mod router;
