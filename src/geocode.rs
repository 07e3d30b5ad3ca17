//! HTTP adapter for the Nominatim-style geocoding service.

use serde::Deserialize;

use crate::coord::Coordinate;
use crate::traits::{GeocodeError, Geocoder, Place};

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1/nominatim".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Client for the geocoding server's `/search` and `/reverse` endpoints.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let url = format!(
            "{}/search?q={}&format=json&addressdetails=1",
            self.config.base_url, query
        );

        let results = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<Vec<SearchResult>>()?;

        results.into_iter().map(place_from).collect()
    }

    fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodeError> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.config.base_url, coordinate.lat, coordinate.lon
        );

        let result = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<ReverseResult>()?;

        Ok(result
            .display_name
            .unwrap_or_else(|| fallback_label(coordinate)))
    }
}

/// Synthesized label for a coordinate without a resolvable address.
pub fn fallback_label(coordinate: Coordinate) -> String {
    format!("{}N, {}E", coordinate.lat, coordinate.lon)
}

/// Nominatim serializes lat/lon as JSON strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: Option<AddressParts>,
}

#[derive(Debug, Deserialize)]
struct ReverseResult {
    #[serde(default)]
    display_name: Option<String>,
}

/// Structured address pieces, used to compose a label when no
/// `display_name` is present.
#[derive(Debug, Default, Deserialize)]
struct AddressParts {
    road: Option<String>,
    house_number: Option<String>,
    city: Option<String>,
    village: Option<String>,
    town: Option<String>,
    neighbourhood: Option<String>,
    country: Option<String>,
}

impl AddressParts {
    fn compose(&self) -> Option<String> {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(road) = &self.road {
            parts.push(road);
        }
        if let Some(number) = &self.house_number {
            parts.push(number);
        }
        // A settlement appears under exactly one of these keys.
        if let Some(settlement) = self
            .city
            .as_ref()
            .or(self.village.as_ref())
            .or(self.town.as_ref())
        {
            parts.push(settlement);
        }
        if let Some(neighbourhood) = &self.neighbourhood {
            parts.push(neighbourhood);
        }
        if let Some(country) = &self.country {
            parts.push(country);
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

fn place_from(result: SearchResult) -> Result<Place, GeocodeError> {
    let SearchResult {
        lat,
        lon,
        display_name,
        address,
    } = result;

    let coordinate = Coordinate::new(parse_component(&lat)?, parse_component(&lon)?);
    let label = display_name
        .or_else(|| address.as_ref().and_then(AddressParts::compose))
        .unwrap_or_else(|| fallback_label(coordinate));

    Ok(Place { label, coordinate })
}

fn parse_component(raw: &str) -> Result<f64, GeocodeError> {
    raw.parse::<f64>()
        .map_err(|_| GeocodeError::Malformed(format!("bad coordinate component: {raw}")))
}
