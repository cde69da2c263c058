//! Nominatim geocoding client for stop-table preparation.
//!
//! Resolves boarding-point names to coordinates before any sequencing
//! happens; the core never makes outbound calls.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::stop::Coordinate;

#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    pub base_url: String,
    /// Sent as the User-Agent header; the public service requires one.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Pause after each lookup, per the public service's usage policy.
    pub rate_limit: Duration,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "route-sequencer".to_string(),
            timeout_secs: 10,
            rate_limit: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    config: GeocodeConfig,
    client: reqwest::blocking::Client,
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Look up the best-match coordinate for a place name.
    ///
    /// Returns None when the service has no usable match.
    pub fn lookup(&self, name: &str) -> Result<Option<Coordinate>, reqwest::Error> {
        let url = format!("{}/search", self.config.base_url);
        let places: Vec<NominatimPlace> = self
            .client
            .get(url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        std::thread::sleep(self.config.rate_limit);

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => Ok(Some(Coordinate::new(lat, lon))),
            _ => {
                warn!(place = %name, "geocoder returned unparsable coordinates");
                Ok(None)
            }
        }
    }
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_search_response() {
        let body = r#"[{"place_id": 1, "lat": "13.0826802", "lon": "80.2707184", "display_name": "Chennai Central"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat.parse::<f64>().unwrap(), 13.0826802);
        assert_eq!(places[0].lon.parse::<f64>().unwrap(), 80.2707184);
    }

    #[test]
    fn test_empty_response_parses() {
        let places: Vec<NominatimPlace> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }
}
