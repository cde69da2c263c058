//! Request-level glue between the stop table and route assembly.

use tracing::debug;

use crate::assembly::{self, RoutePolicy, RouteResult, RouteStatus};
use crate::dataset::{RouteTable, normalize_route};
use crate::stop::Stop;

/// How many known route numbers a not-found message lists.
const ROUTE_SAMPLE_LIMIT: usize = 50;

/// Sequence one route from the table against a fixed destination.
pub fn optimize(
    table: &RouteTable,
    route_no: &str,
    destination: Stop,
    policy: &RoutePolicy,
) -> RouteResult {
    let wanted = normalize_route(route_no);
    let stops = table.stops_for(&wanted);

    if stops.is_empty() {
        debug!(route = %wanted, "route not found in stop table");
        let sample: Vec<&str> = table.route_numbers().take(ROUTE_SAMPLE_LIMIT).collect();
        return RouteResult {
            status: RouteStatus::NotFound,
            itinerary: Vec::new(),
            total_distance_km: 0.0,
            estimated_time_min: 0.0,
            total_ridership: 0,
            message: Some(format!(
                "no stops found for route {}; known routes (sample): {}",
                wanted,
                sample.join(", ")
            )),
        };
    }

    let mut result = assembly::assemble(stops.to_vec(), destination, policy);
    if result.status == RouteStatus::RejectedBelowThreshold {
        // Assembly does not know the route number; attach it here.
        result.message = Some(format!(
            "bus route {} is removed: total ridership ({}) is below the minimum of {}",
            wanted, result.total_ridership, policy.min_ridership
        ));
    }
    result
}
