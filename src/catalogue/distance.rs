use std::collections::HashMap;

/// Partial function `D: (Stop, Stop) -> metres`, keyed by stop index.
///
/// Declared along the first stop's outgoing direction; lookup falls back to
/// the reverse pair when the forward entry is absent. `D[a,a]` (a loop
/// distance) is permitted and stored like any other entry.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    declared: HashMap<(u32, u32), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `D[from, to] = meters`, overwriting any prior value.
    pub fn set(&mut self, from: u32, to: u32, meters: u32) {
        self.declared.insert((from, to), meters);
    }

    /// `D[a,b]` if declared, else `D[b,a]`. `None` if neither direction is declared.
    pub fn get(&self, a: u32, b: u32) -> Option<u32> {
        self.declared
            .get(&(a, b))
            .or_else(|| self.declared.get(&(b, a)))
            .copied()
    }
}
