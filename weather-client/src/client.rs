use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::ClientConfig,
    model::{WeatherQuery, WeatherReport},
    response::ApiResponse,
};

/// Probe location for [`WeatherClient::validate_api_key`]. Deliberately not
/// the configured default city: the probe must work even when the default is
/// misconfigured.
const PROBE_CITY: &str = "London";
const PROBE_COUNTRY: &str = "UK";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection or timeout failure before any status code was obtained.
    #[error("network error talking to the weather API: {0}")]
    Network(#[from] reqwest::Error),

    /// A typed projection was requested but the API answered with a non-200.
    #[error("weather request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// A 200 body that does not decode into the expected shape.
    #[error("failed to decode weather payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Narrow client for the current-weather endpoint.
///
/// One base URL, one endpoint, API key as a query parameter. Holds no mutable
/// state beyond its immutable configuration, so a single instance can be
/// shared read-only across parallel check tasks.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: ClientConfig,
    http: Client,
}

impl WeatherClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch current weather by city name, optionally scoped by country code.
    ///
    /// `api_key_override` replaces the configured key for this one call; it
    /// exists so checks can exercise invalid-credential paths. A single
    /// attempt is made; 4xx/5xx answers come back as a normal [`ApiResponse`].
    pub async fn fetch_by_name(
        &self,
        city: &str,
        country_code: Option<&str>,
        api_key_override: Option<&str>,
    ) -> Result<ApiResponse, ClientError> {
        let query = WeatherQuery::by_name(city, country_code);
        let api_key = api_key_override.unwrap_or(self.config.api_key.as_str());

        self.fetch(&query, api_key).await
    }

    /// Fetch current weather by geographic coordinates, always with the
    /// configured key.
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<ApiResponse, ClientError> {
        let query = WeatherQuery::by_coordinates(lat, lon);

        self.fetch(&query, self.config.api_key.as_str()).await
    }

    /// Fetch by name and decode the body into a [`WeatherReport`].
    ///
    /// Checks that assert on error responses should use [`Self::fetch_by_name`]
    /// instead: any non-200 here becomes [`ClientError::RequestFailed`]
    /// carrying the status and raw body.
    pub async fn fetch_by_name_typed(
        &self,
        city: &str,
        country_code: Option<&str>,
    ) -> Result<WeatherReport, ClientError> {
        let response = self.fetch_by_name(city, country_code, None).await?;

        if response.status() != 200 {
            return Err(ClientError::RequestFailed {
                status: response.status(),
                body: response.body().to_string(),
            });
        }

        Ok(serde_json::from_str(response.body())?)
    }

    /// Credential probe: `false` on a transport failure or a 401, `true`
    /// otherwise.
    ///
    /// This detects key rejection only. A non-401 failure status (say a
    /// transient 500) still reports `true`; it is not a health check.
    pub async fn validate_api_key(&self) -> bool {
        match self.fetch_by_name(PROBE_CITY, Some(PROBE_COUNTRY), None).await {
            Ok(response) => response.status() != 401,
            Err(_) => false,
        }
    }

    async fn fetch(&self, query: &WeatherQuery, api_key: &str) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/weather", self.config.base_url);
        let units = self.config.units.as_str();

        let mut params: Vec<(&str, String)> = Vec::with_capacity(4);
        match query {
            WeatherQuery::ByName { .. } => {
                // location_param is always Some for the name variant
                if let Some(location) = query.location_param() {
                    debug!(%location, units, "requesting current weather by name");
                    params.push(("q", location));
                }
            }
            WeatherQuery::ByCoordinates { lat, lon } => {
                debug!(lat, lon, units, "requesting current weather by coordinates");
                params.push(("lat", lat.to_string()));
                params.push(("lon", lon.to_string()));
            }
        }
        params.push(("appid", api_key.to_string()));
        params.push(("units", units.to_string()));

        let res = self.http.get(&url).query(&params).send().await?;

        let response = ApiResponse::from_reqwest(res).await?;
        debug!(status = response.status(), "weather API answered");

        Ok(response)
    }
}
