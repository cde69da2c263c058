//! route-sequencer
//!
//! Sequences the stops of a single bus route: great-circle distances, a
//! cheapest-arc + 2-opt tour solver, and the policy layer that applies the
//! ridership threshold and appends the fixed destination.

pub mod stop;
pub mod haversine;
pub mod matrix;
pub mod solver;
pub mod assembly;
pub mod dataset;
pub mod geocode;
pub mod service;
