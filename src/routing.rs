//! HTTP adapter for the pairwise routing service.

use serde::Deserialize;

use crate::coord::Coordinate;
use crate::traits::{RouteError, RoutingService};

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Client for the route server's `/route` endpoint.
#[derive(Debug, Clone)]
pub struct HttpRoutingService {
    config: RoutingConfig,
    client: reqwest::blocking::Client,
}

impl HttpRoutingService {
    pub fn new(config: RoutingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RoutingService for HttpRoutingService {
    fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
        profile: &str,
    ) -> Result<Vec<Coordinate>, RouteError> {
        let url = format!(
            "{}/route?coordinates={}&profile={}",
            self.config.base_url,
            pair_query(from, to),
            profile
        );

        let response = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<RouteResponse>()?;

        if !response.ok {
            return Err(RouteError::Service(
                response
                    .error
                    .unwrap_or_else(|| "route server error".to_string()),
            ));
        }

        Ok(response
            .route
            .into_iter()
            .map(|[lon, lat]| Coordinate::new(lat, lon))
            .collect())
    }
}

/// Query value for a waypoint pair. The server expects lon,lat order.
fn pair_query(from: Coordinate, to: Coordinate) -> String {
    format!(
        r#"[{{"lon":{:.6},"lat":{:.6}}},{{"lon":{:.6},"lat":{:.6}}}]"#,
        from.lon, from.lat, to.lon, to.lat
    )
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    ok: bool,
    #[serde(default)]
    route: Vec<[f64; 2]>,
    #[serde(default)]
    error: Option<String>,
}
