//! Stop table ingestion.
//!
//! Loads the per-route stop table from CSV, grouping stops by normalized
//! route number. Also hosts the one-shot geocoding pipeline that turns a
//! raw table of boarding-point names into a clean table with coordinates.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::geocode::GeocodeClient;
use crate::stop::{Coordinate, Stop};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read stop table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stop table: {0}")]
    Csv(#[from] csv::Error),
    #[error("stop '{stop}' has out-of-range coordinates ({lat}, {lon})")]
    InvalidCoordinate { stop: String, lat: f64, lon: f64 },
    #[error("geocoding request failed: {0}")]
    Geocode(#[from] reqwest::Error),
}

/// One row of the clean stop table.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "R.No")]
    route_no: String,
    #[serde(rename = "Boarding Point")]
    boarding_point: String,
    #[serde(rename = "Time")]
    time: String,
    lat: f64,
    lon: f64,
    #[serde(rename = "students per stop")]
    ridership: u32,
}

/// One row of a raw stop table that still lacks coordinates.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "R.No")]
    route_no: String,
    #[serde(rename = "Boarding Point")]
    boarding_point: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "students per stop")]
    ridership: u32,
}

/// Stops grouped by normalized route number, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(String, Vec<Stop>)>,
}

impl RouteTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_reader(File::open(path)?)
    }

    /// Parse a stop table CSV. This is the one place coordinates are
    /// validated; everything downstream assumes they are in range.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut table = Self::default();
        for record in csv::Reader::from_reader(reader).deserialize() {
            let record: Record = record?;
            let coordinate = Coordinate::new(record.lat, record.lon);
            if !coordinate.in_range() {
                return Err(DatasetError::InvalidCoordinate {
                    stop: record.boarding_point,
                    lat: record.lat,
                    lon: record.lon,
                });
            }

            let mut stop = Stop::new(record.boarding_point, coordinate, record.ridership);
            let time = record.time.trim();
            if !time.is_empty() {
                stop.scheduled_time = Some(time.to_string());
            }

            table.push(normalize_route(&record.route_no), stop);
        }
        Ok(table)
    }

    fn push(&mut self, route_no: String, stop: Stop) {
        match self
            .routes
            .iter_mut()
            .find(|(existing, _)| *existing == route_no)
        {
            Some((_, stops)) => stops.push(stop),
            None => self.routes.push((route_no, vec![stop])),
        }
    }

    /// Stops for a route, matched on the normalized route number.
    /// Empty for unknown routes.
    pub fn stops_for(&self, route_no: &str) -> &[Stop] {
        let wanted = normalize_route(route_no);
        self.routes
            .iter()
            .find(|(existing, _)| *existing == wanted)
            .map(|(_, stops)| stops.as_slice())
            .unwrap_or(&[])
    }

    /// Known route numbers in first-seen order.
    pub fn route_numbers(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(route_no, _)| route_no.as_str())
    }

    /// Number of distinct routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Route numbers are matched with surrounding whitespace ignored and
/// letters uppercased, so "1b " and "1B" are the same route.
pub fn normalize_route(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Geocode a raw stop table and write the clean table with coordinates.
///
/// Each distinct boarding point is looked up once. Rows the geocoder cannot
/// resolve are skipped with a warning; returns the number of rows written.
pub fn geocode_stop_table<R: Read, W: Write>(
    reader: R,
    client: &GeocodeClient,
    writer: W,
) -> Result<usize, DatasetError> {
    let mut out = csv::Writer::from_writer(writer);
    let mut resolved: HashMap<String, Coordinate> = HashMap::new();
    let mut written = 0usize;

    for record in csv::Reader::from_reader(reader).deserialize() {
        let record: RawRecord = record?;
        let coordinate = match resolved.get(&record.boarding_point) {
            Some(&coordinate) => Some(coordinate),
            None => {
                let looked_up = client.lookup(&record.boarding_point)?;
                if let Some(coordinate) = looked_up {
                    resolved.insert(record.boarding_point.clone(), coordinate);
                }
                looked_up
            }
        };

        let Some(coordinate) = coordinate else {
            warn!(
                stop = %record.boarding_point,
                "skipping stop the geocoder could not resolve"
            );
            continue;
        };

        out.serialize(Record {
            route_no: record.route_no,
            boarding_point: record.boarding_point,
            time: record.time,
            lat: coordinate.lat,
            lon: coordinate.lon,
            ridership: record.ridership,
        })?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
