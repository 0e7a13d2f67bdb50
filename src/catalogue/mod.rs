//! The in-memory data model: stops, buses, the distance table, and the
//! reverse stop→buses index used by every query.

mod bus;
mod distance;
mod stop;

pub use bus::Bus;
pub use distance::DistanceTable;
pub use stop::Stop;

use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use crate::{error::LoadError, geo::Coordinate};

/// A read-only-after-load store of stops, buses, and inter-stop distances.
///
/// Stops and buses are addressed both by name (via a `HashMap<Arc<str>, u32>`
/// lookup) and by a dense `u32` index assigned at insertion time; the router
/// and renderer always use the index form once the catalogue is built.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_lookup: HashMap<Arc<str>, u32>,
    bus_lookup: HashMap<Arc<str>, u32>,
    distances: DistanceTable,
    roundtrip: Vec<bool>,
    stop_to_buses: Vec<Vec<u32>>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new stop. Fails if `name` is already present.
    pub fn add_stop(&mut self, name: &str, coordinate: Coordinate) -> Result<u32, LoadError> {
        if self.stop_lookup.contains_key(name) {
            return Err(LoadError::DuplicateStop(name.to_string()));
        }
        let index = self.stops.len() as u32;
        let name: Arc<str> = Arc::from(name);
        self.stops.push(Stop {
            index,
            name: name.clone(),
            coordinate,
        });
        self.stop_lookup.insert(name, index);
        self.stop_to_buses.push(Vec::new());
        Ok(index)
    }

    /// Records `D[from_name, to_name] = meters`, overwriting any prior value.
    pub fn set_distance(
        &mut self,
        from_name: &str,
        to_name: &str,
        meters: u32,
    ) -> Result<(), LoadError> {
        let from = self.require_stop_index(from_name)?;
        let to = self.require_stop_index(to_name)?;
        self.distances.set(from, to, meters);
        Ok(())
    }

    /// Resolves `stop_names` and registers a bus. Non-round-trip buses are
    /// materialised into their palindrome before storage.
    pub fn add_bus(
        &mut self,
        name: &str,
        stop_names: &[String],
        is_roundtrip: bool,
    ) -> Result<u32, LoadError> {
        if self.bus_lookup.contains_key(name) {
            return Err(LoadError::DuplicateBus(name.to_string()));
        }
        let resolved: Vec<u32> = stop_names
            .iter()
            .map(|stop_name| {
                self.stop_lookup
                    .get(stop_name.as_str())
                    .copied()
                    .ok_or_else(|| LoadError::UnknownStop {
                        bus: name.to_string(),
                        stop: stop_name.clone(),
                    })
            })
            .collect::<Result<_, _>>()?;

        if is_roundtrip {
            if resolved.first() != resolved.last() {
                return Err(LoadError::RoundTripEndpointMismatch(name.to_string()));
            }
        }

        let materialised: Box<[u32]> = if is_roundtrip {
            resolved.into_boxed_slice()
        } else {
            let mut full = resolved.clone();
            full.extend(resolved.iter().rev().skip(1));
            full.into_boxed_slice()
        };

        let index = self.buses.len() as u32;
        let name: Arc<str> = Arc::from(name);
        let mut seen = Vec::new();
        for &stop_idx in materialised.iter() {
            if !seen.contains(&stop_idx) {
                seen.push(stop_idx);
                self.stop_to_buses[stop_idx as usize].push(index);
            }
        }

        self.buses.push(Bus {
            index,
            name: name.clone(),
            stops: materialised,
            is_roundtrip,
        });
        self.bus_lookup.insert(name, index);
        self.roundtrip.push(is_roundtrip);
        Ok(index)
    }

    pub fn get_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_lookup
            .get(name)
            .map(|&idx| &self.stops[idx as usize])
    }

    pub fn get_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_lookup
            .get(name)
            .map(|&idx| &self.buses[idx as usize])
    }

    pub fn stop_by_index(&self, index: u32) -> &Stop {
        &self.stops[index as usize]
    }

    pub fn bus_by_index(&self, index: u32) -> &Bus {
        &self.buses[index as usize]
    }

    /// Bus names serving `stop_name`, in lexicographic order. `None` if the
    /// stop does not exist; `Some(&[])` if it exists but no bus serves it.
    pub fn buses_through(&self, stop_name: &str) -> Option<Vec<&str>> {
        let &stop_idx = self.stop_lookup.get(stop_name)?;
        let mut names: Vec<&str> = self.stop_to_buses[stop_idx as usize]
            .iter()
            .map(|&bus_idx| self.buses[bus_idx as usize].name.as_ref())
            .collect();
        names.sort_unstable();
        Some(names)
    }

    /// `distance(a,b)` per the fallback rule. `None` if neither direction is declared.
    pub fn distance(&self, a: u32, b: u32) -> Option<u32> {
        self.distances.get(a, b)
    }

    pub fn all_stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn all_buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    fn require_stop_index(&self, name: &str) -> Result<u32, LoadError> {
        self.stop_lookup
            .get(name)
            .copied()
            .ok_or_else(|| LoadError::UnknownDistanceStop(name.to_string()))
    }
}

/// Verifies every adjacent pair in every materialised bus route has a
/// declared distance in at least one direction, per the referential
/// integrity invariant in the data model.
pub fn validate_adjacent_distances(catalogue: &Catalogue) -> Result<(), LoadError> {
    for bus in catalogue.all_buses() {
        for window in bus.stops.windows(2) {
            let (a, b) = (window[0], window[1]);
            if catalogue.distance(a, b).is_none() {
                return Err(LoadError::MissingDistance {
                    from: catalogue.stop_by_index(a).name.to_string(),
                    to: catalogue.stop_by_index(b).name.to_string(),
                });
            }
        }
    }
    debug!(
        buses = catalogue.all_buses().len(),
        stops = catalogue.stop_count(),
        "catalogue populated"
    );
    Ok(())
}
