use std::sync::Arc;

use crate::geo::Coordinate;

/// A named geodetic point the network serves.
///
/// Identity is by [`Stop::name`]; [`Stop::index`] is the dense position
/// assigned at insertion time and is what the router and renderer address
/// stops by internally.
#[derive(Debug, Clone)]
pub struct Stop {
    pub index: u32,
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}
