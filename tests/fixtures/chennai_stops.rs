//! Real Chennai-area boarding points for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The college in Thandalam is the
//! fixed destination every route terminates at.

/// A named boarding point with coordinates.
#[derive(Debug, Clone)]
pub struct BoardingPoint {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl BoardingPoint {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }
}

/// The fixed destination.
pub const COLLEGE: BoardingPoint =
    BoardingPoint::new("Rajalakshmi Engineering College", 13.008313, 80.003310);

// ============================================================================
// North Chennai
// ============================================================================

pub const NORTH_CHENNAI: &[BoardingPoint] = &[
    BoardingPoint::new("Thiruvottiyur", 13.1579, 80.3004),
    BoardingPoint::new("Washermanpet", 13.1166, 80.2897),
    BoardingPoint::new("Perambur", 13.1183, 80.2323),
    BoardingPoint::new("Villivakkam", 13.1081, 80.2089),
    BoardingPoint::new("Madhavaram", 13.1487, 80.2311),
    BoardingPoint::new("Red Hills", 13.1926, 80.1841),
    BoardingPoint::new("Ambattur", 13.1143, 80.1548),
    BoardingPoint::new("Avadi", 13.1147, 80.1098),
];

// ============================================================================
// Central Chennai
// ============================================================================

pub const CENTRAL_CHENNAI: &[BoardingPoint] = &[
    BoardingPoint::new("Chennai Central", 13.0827, 80.2707),
    BoardingPoint::new("Egmore", 13.0732, 80.2609),
    BoardingPoint::new("Nungambakkam", 13.0569, 80.2425),
    BoardingPoint::new("Royapettah", 13.0544, 80.2647),
    BoardingPoint::new("T Nagar", 13.0418, 80.2341),
    BoardingPoint::new("Kodambakkam", 13.0521, 80.2255),
    BoardingPoint::new("Vadapalani", 13.0504, 80.2121),
    BoardingPoint::new("Anna Nagar", 13.0850, 80.2101),
    BoardingPoint::new("Koyambedu", 13.0694, 80.1948),
    BoardingPoint::new("Saidapet", 13.0213, 80.2231),
];

// ============================================================================
// West Chennai (toward the college)
// ============================================================================

pub const WEST_CHENNAI: &[BoardingPoint] = &[
    BoardingPoint::new("Maduravoyal", 13.0632, 80.1661),
    BoardingPoint::new("Valasaravakkam", 13.0409, 80.1883),
    BoardingPoint::new("Porur", 13.0382, 80.1565),
    BoardingPoint::new("Mangadu", 13.0292, 80.1078),
    BoardingPoint::new("Kundrathur", 12.9986, 80.0967),
    BoardingPoint::new("Poonamallee", 13.0465, 80.0942),
    BoardingPoint::new("Thirumazhisai", 13.0477, 80.0607),
    BoardingPoint::new("Sriperumbudur", 12.9675, 79.9442),
];

// ============================================================================
// South Chennai
// ============================================================================

pub const SOUTH_CHENNAI: &[BoardingPoint] = &[
    BoardingPoint::new("Mylapore", 13.0337, 80.2687),
    BoardingPoint::new("Adyar", 13.0063, 80.2574),
    BoardingPoint::new("Thiruvanmiyur", 12.9830, 80.2594),
    BoardingPoint::new("Velachery", 12.9815, 80.2180),
    BoardingPoint::new("Guindy", 13.0067, 80.2206),
    BoardingPoint::new("Sholinganallur", 12.9010, 80.2279),
    BoardingPoint::new("Pallavaram", 12.9675, 80.1491),
    BoardingPoint::new("Chromepet", 12.9516, 80.1462),
    BoardingPoint::new("Tambaram", 12.9249, 80.1000),
];

// ============================================================================
// All Points Combined
// ============================================================================

/// Returns all boarding points as a single list.
pub fn all_points() -> Vec<BoardingPoint> {
    let mut all = Vec::with_capacity(40);
    all.extend_from_slice(NORTH_CHENNAI);
    all.extend_from_slice(CENTRAL_CHENNAI);
    all.extend_from_slice(WEST_CHENNAI);
    all.extend_from_slice(SOUTH_CHENNAI);
    all
}

/// Returns a subset of boarding points for smaller tests.
pub fn sample_points(count: usize) -> Vec<BoardingPoint> {
    all_points().into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_count() {
        let all = all_points();
        assert!(all.len() >= 30, "should have at least 30 points, got {}", all.len());
    }

    #[test]
    fn test_coordinates_in_chennai_area() {
        for point in all_points() {
            assert!(
                point.lat > 12.8 && point.lat < 13.3,
                "{} lat out of range: {}",
                point.name,
                point.lat
            );
            assert!(
                point.lon > 79.8 && point.lon < 80.4,
                "{} lon out of range: {}",
                point.name,
                point.lon
            );
        }
    }
}
