//! Fatal load-time errors.
//!
//! Query-level "not found" outcomes are not errors; they are ordinary
//! [`crate::handler::QueryResult`] values, since a missing bus or an
//! unreachable route is an expected, recoverable answer, not a defect in
//! the input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("duplicate stop name: {0}")]
    DuplicateStop(String),
    #[error("duplicate bus name: {0}")]
    DuplicateBus(String),
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStop { bus: String, stop: String },
    #[error("distance declared for unknown stop {0}")]
    UnknownDistanceStop(String),
    #[error("no declared distance between {from} and {to}")]
    MissingDistance { from: String, to: String },
    #[error("round-trip bus {0} must start and end at the same stop")]
    RoundTripEndpointMismatch(String),
    #[error("colour palette must not be empty")]
    EmptyPalette,
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        LoadError::Malformed(value.to_string())
    }
}
