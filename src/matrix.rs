//! Pairwise distance matrix over stop coordinates.
//!
//! Cells are whole meters so downstream arc-cost arithmetic is exact.

use rayon::prelude::*;
use thiserror::Error;

use crate::haversine;
use crate::stop::Coordinate;

/// No coordinates were supplied to the matrix builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot build a distance matrix from zero coordinates")]
pub struct EmptyInputError;

/// Symmetric matrix of great-circle distances in meters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<Vec<u32>>,
}

impl DistanceMatrix {
    /// Build the full n x n matrix for a coordinate set.
    ///
    /// The upper triangle is computed in parallel and mirrored, so the
    /// matrix is symmetric by construction with a zero diagonal. Distances
    /// are rounded to the nearest meter.
    pub fn build(coords: &[Coordinate]) -> Result<Self, EmptyInputError> {
        if coords.is_empty() {
            return Err(EmptyInputError);
        }

        let n = coords.len();
        let upper: Vec<Vec<u32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                coords[i + 1..]
                    .iter()
                    .map(|&other| haversine::distance_meters(coords[i], other).round() as u32)
                    .collect()
            })
            .collect();

        let mut cells = vec![vec![0u32; n]; n];
        for (i, row) in upper.iter().enumerate() {
            for (offset, &meters) in row.iter().enumerate() {
                let j = i + 1 + offset;
                cells[i][j] = meters;
                cells[j][i] = meters;
            }
        }

        Ok(Self { cells })
    }

    /// Wrap pre-computed rows.
    ///
    /// Rows must be square and symmetric with a zero diagonal, like `build`
    /// produces; the solver's reversal arithmetic assumes symmetric arc
    /// costs. Intended for tests that need exact synthetic distances.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let n = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == n), "rows must be square");
        debug_assert!(
            (0..n).all(|i| rows[i][i] == 0 && (i + 1..n).all(|j| rows[i][j] == rows[j][i])),
            "rows must be symmetric with a zero diagonal"
        );
        Self { cells: rows }
    }

    /// Distance in meters between two node indices.
    pub fn distance(&self, from: usize, to: usize) -> u32 {
        self.cells[from][to]
    }

    /// Number of nodes the matrix covers.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
