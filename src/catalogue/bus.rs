use std::sync::Arc;

/// A named ordered walk over stops.
///
/// [`Bus::stops`] always holds the *materialised* route: for a round-trip
/// bus this is the declared stop list verbatim; for a non-round-trip bus it
/// is the declared list followed by its own reverse, minus the duplicated
/// middle stop (the palindrome described in the data model).
#[derive(Debug, Clone)]
pub struct Bus {
    pub index: u32,
    pub name: Arc<str>,
    pub stops: Box<[u32]>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Number of stops visited, counting repeats (`stop_count` in the stats query).
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// `floor(len / 2)`, the index of the bus's conceptual midpoint stop in
    /// [`Bus::stops`]. Meaningful only for non-round-trip buses.
    pub fn middle_index(&self) -> usize {
        self.stops.len() / 2
    }
}
