//! Route assembly and trip policy.
//!
//! Turns a raw stop list into a final itinerary: ridership threshold,
//! sequencing over pickup stops only, then appending the fixed destination.

use serde::Serialize;
use tracing::{debug, info};

use crate::haversine;
use crate::matrix::DistanceMatrix;
use crate::solver::{self, SolveOptions};
use crate::stop::{Coordinate, Stop};

/// Minimum total ridership for a route to keep running.
pub const DEFAULT_MIN_RIDERSHIP: u32 = 15;

/// Assumed average speed for trip time estimates.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Routes whose summed ridership falls strictly below this are rejected.
    pub min_ridership: u32,
    /// Assumed average speed in km/h for the time estimate.
    pub average_speed_kmh: f64,
    pub solve: SolveOptions,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            min_ridership: DEFAULT_MIN_RIDERSHIP,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            solve: SolveOptions::default(),
        }
    }
}

/// Outcome of a sequencing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    Accepted,
    RejectedBelowThreshold,
    NotFound,
    Infeasible,
}

/// One stop in the final visiting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryEntry {
    pub stop: Stop,
    /// Zero-based position in the visiting order.
    pub position: usize,
    /// Distance travelled from the first stop up to this one, in meters.
    pub distance_from_start_m: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub status: RouteStatus,
    pub itinerary: Vec<ItineraryEntry>,
    pub total_distance_km: f64,
    pub estimated_time_min: f64,
    pub total_ridership: u32,
    /// Human-readable explanation for non-accepted outcomes.
    pub message: Option<String>,
}

/// Sequence `stops` into an itinerary terminating at `destination`.
///
/// The destination never participates in the search: the matrix and the
/// solver see pickup stops only, and the destination is appended afterwards
/// with zero ridership and no time label.
pub fn assemble(stops: Vec<Stop>, destination: Stop, policy: &RoutePolicy) -> RouteResult {
    if stops.is_empty() {
        return RouteResult {
            status: RouteStatus::NotFound,
            itinerary: Vec::new(),
            total_distance_km: 0.0,
            estimated_time_min: 0.0,
            total_ridership: 0,
            message: Some("no stops to sequence".to_string()),
        };
    }

    let total_ridership: u32 = stops.iter().map(|stop| stop.ridership).sum();
    if total_ridership < policy.min_ridership {
        debug!(
            total_ridership,
            min = policy.min_ridership,
            "route rejected below ridership threshold"
        );
        let message = format!(
            "route removed: total ridership ({}) is below the minimum of {}",
            total_ridership, policy.min_ridership
        );
        let itinerary = stops
            .into_iter()
            .enumerate()
            .map(|(position, stop)| ItineraryEntry {
                stop,
                position,
                distance_from_start_m: 0,
            })
            .collect();
        return RouteResult {
            status: RouteStatus::RejectedBelowThreshold,
            itinerary,
            total_distance_km: 0.0,
            estimated_time_min: 0.0,
            total_ridership,
            message: Some(message),
        };
    }

    let coords: Vec<Coordinate> = stops.iter().map(|stop| stop.coordinate).collect();
    let Ok(matrix) = DistanceMatrix::build(&coords) else {
        return infeasible(total_ridership);
    };
    let Ok(tour) = solver::solve(&matrix, 0, None, &policy.solve) else {
        return infeasible(total_ridership);
    };

    // Walk the solved order, accumulating distance along the matrix edges.
    let mut itinerary: Vec<ItineraryEntry> = Vec::with_capacity(tour.order.len() + 1);
    let mut travelled: u64 = 0;
    for (position, &index) in tour.order.iter().enumerate() {
        if position > 0 {
            travelled += matrix.distance(tour.order[position - 1], index) as u64;
        }
        itinerary.push(ItineraryEntry {
            stop: stops[index].clone(),
            position,
            distance_from_start_m: travelled,
        });
    }

    // One extra edge from the last pickup to the destination, rounded the
    // same way the matrix rounds.
    let last_index = tour.order.last().copied().unwrap_or(0);
    travelled += haversine::distance_meters(stops[last_index].coordinate, destination.coordinate)
        .round() as u64;

    let terminal = Stop {
        ridership: 0,
        scheduled_time: None,
        ..destination
    };
    itinerary.push(ItineraryEntry {
        stop: terminal,
        position: itinerary.len(),
        distance_from_start_m: travelled,
    });

    let total_distance_km = round2(travelled as f64 / 1000.0);
    let estimated_time_min = round2(total_distance_km / policy.average_speed_kmh * 60.0);

    info!(
        stops = itinerary.len(),
        total_distance_km, "route sequenced"
    );

    RouteResult {
        status: RouteStatus::Accepted,
        itinerary,
        total_distance_km,
        estimated_time_min,
        total_ridership,
        message: None,
    }
}

fn infeasible(total_ridership: u32) -> RouteResult {
    RouteResult {
        status: RouteStatus::Infeasible,
        itinerary: Vec::new(),
        total_distance_km: 0.0,
        estimated_time_min: 0.0,
        total_ridership,
        message: Some("could not compute a visiting order".to_string()),
    }
}

/// Round to two decimals for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
