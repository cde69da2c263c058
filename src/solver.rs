//! Single-vehicle tour solver.
//!
//! Cheapest-arc construction followed by wall-clock-bounded 2-opt
//! improvement over an open path: the vehicle starts at a fixed stop and
//! does not return to it.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::matrix::DistanceMatrix;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Wall-clock budget for the 2-opt improvement phase. A zero budget
    /// skips improvement and returns the constructed tour as-is.
    pub improvement_budget: Duration,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            improvement_budget: Duration::from_secs(1),
        }
    }
}

/// A solved visiting order with its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Visiting order over the searched nodes, beginning at the fixed
    /// start. A forced end index is never present; the caller appends it.
    pub order: Vec<usize>,
    /// Sum of consecutive matrix edges along `order`, in meters.
    pub total_distance_m: u64,
}

/// No tour can be constructed for the given inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no feasible tour for the given stops")]
pub struct Infeasible;

/// Sequence the nodes of `matrix` into a tour starting at `start`.
///
/// A `forced_end` index is excluded from the search entirely: it never
/// participates in construction or improvement, and the returned order
/// omits it. Identical inputs always produce an identical order; ties in
/// construction go to the lowest index.
pub fn solve(
    matrix: &DistanceMatrix,
    start: usize,
    forced_end: Option<usize>,
    options: &SolveOptions,
) -> Result<Tour, Infeasible> {
    let n = matrix.len();
    if n == 0 || start >= n {
        return Err(Infeasible);
    }
    if let Some(end) = forced_end {
        if end == start || end >= n {
            return Err(Infeasible);
        }
    }

    let mut order = construct(matrix, start, forced_end, n);
    debug!(
        stops = order.len(),
        total_m = tour_length(matrix, &order),
        "constructed initial tour"
    );

    if !options.improvement_budget.is_zero() && order.len() >= 3 {
        improve(matrix, &mut order, options.improvement_budget);
    }

    let total_distance_m = tour_length(matrix, &order);
    Ok(Tour {
        order,
        total_distance_m,
    })
}

/// Total distance of an order, recomputed from consecutive matrix edges.
fn tour_length(matrix: &DistanceMatrix, order: &[usize]) -> u64 {
    order
        .windows(2)
        .map(|pair| matrix.distance(pair[0], pair[1]) as u64)
        .sum()
}

/// Cheapest-arc construction: repeatedly extend the open end of the path
/// with the nearest unvisited node.
fn construct(
    matrix: &DistanceMatrix,
    start: usize,
    forced_end: Option<usize>,
    n: usize,
) -> Vec<usize> {
    let mut visited = vec![false; n];
    visited[start] = true;
    if let Some(end) = forced_end {
        // Excluded from the search; the caller appends it afterwards.
        visited[end] = true;
    }

    let searched = if forced_end.is_some() { n - 1 } else { n };
    let mut order = Vec::with_capacity(searched);
    order.push(start);
    let mut current = start;

    while order.len() < searched {
        let mut next: Option<(usize, u32)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let distance = matrix.distance(current, candidate);
            // Strict < keeps ties on the lowest index.
            let better = match next {
                Some((_, best)) => distance < best,
                None => true,
            };
            if better {
                next = Some((candidate, distance));
            }
        }

        match next {
            Some((candidate, _)) => {
                visited[candidate] = true;
                order.push(candidate);
                current = candidate;
            }
            None => break,
        }
    }

    order
}

// ============================================================================
// Local Search
// ============================================================================

/// Run 2-opt until no move improves the path or the budget elapses.
fn improve(matrix: &DistanceMatrix, order: &mut [usize], budget: Duration) {
    let deadline = Instant::now() + budget;
    let mut moves = 0u32;

    while two_opt_improve(matrix, order, deadline) {
        moves += 1;
    }

    if Instant::now() >= deadline {
        debug!(moves, "improvement stopped at the wall-clock budget");
    } else {
        debug!(moves, "improvement converged");
    }
}

/// 2-opt: reverse a segment of the path to shorten it.
///
/// Position 0 is pinned. Returns true as soon as one improving reversal has
/// been applied; returns false once a full scan finds none or the deadline
/// passes.
fn two_opt_improve(matrix: &DistanceMatrix, order: &mut [usize], deadline: Instant) -> bool {
    let n = order.len();
    if n < 3 {
        return false;
    }

    for i in 0..n - 1 {
        if Instant::now() >= deadline {
            return false;
        }
        for j in i + 2..n {
            // Reversing order[i+1..=j] replaces the edges into the segment
            // and out of it; on an open path the final node has no out edge.
            let removed = matrix.distance(order[i], order[i + 1]) as u64
                + if j + 1 < n {
                    matrix.distance(order[j], order[j + 1]) as u64
                } else {
                    0
                };
            let added = matrix.distance(order[i], order[j]) as u64
                + if j + 1 < n {
                    matrix.distance(order[i + 1], order[j + 1]) as u64
                } else {
                    0
                };

            if added < removed {
                order[i + 1..=j].reverse();
                return true;
            }
        }
    }

    false
}
