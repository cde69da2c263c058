//! Test fixtures for route-sequencer.
//!
//! Real Chennai-area boarding points for realistic sequencing tests.

pub mod chennai_stops;

pub use chennai_stops::*;
