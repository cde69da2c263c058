//! Stop and coordinate data model.
//!
//! All coercion and validation happens at the dataset boundary; code past
//! that point can assume coordinates are in range.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components are within the valid WGS-84 ranges.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A boarding point on a bus route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Display name of the boarding point.
    pub name: String,
    pub coordinate: Coordinate,
    /// Riders boarding at this stop.
    pub ridership: u32,
    /// Opaque scheduled-time label from the stop table, passed through unmodified.
    pub scheduled_time: Option<String>,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinate: Coordinate, ridership: u32) -> Self {
        Self {
            name: name.into(),
            coordinate,
            ridership,
            scheduled_time: None,
        }
    }

    pub fn scheduled_at(mut self, time: impl Into<String>) -> Self {
        self.scheduled_time = Some(time.into());
        self
    }
}
