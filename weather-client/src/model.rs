use serde::{Deserialize, Serialize};

/// Unit system requested from the upstream API via the `units` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location part of a current-weather request. Exactly one variant per query.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    ByName {
        city: String,
        country_code: Option<String>,
    },
    ByCoordinates {
        lat: f64,
        lon: f64,
    },
}

impl WeatherQuery {
    pub fn by_name(city: impl Into<String>, country_code: Option<&str>) -> Self {
        WeatherQuery::ByName {
            city: city.into(),
            country_code: country_code.map(str::to_owned),
        }
    }

    pub fn by_coordinates(lat: f64, lon: f64) -> Self {
        WeatherQuery::ByCoordinates { lat, lon }
    }

    /// Value for the `q` parameter: `"{city}"` or `"{city},{country_code}"`.
    /// Coordinate queries use `lat`/`lon` instead and have no `q` rendering.
    pub fn location_param(&self) -> Option<String> {
        match self {
            WeatherQuery::ByName { city, country_code } => Some(match country_code {
                Some(cc) => format!("{city},{cc}"),
                None => city.clone(),
            }),
            WeatherQuery::ByCoordinates { .. } => None,
        }
    }
}

/// Typed projection of a successful current-weather body.
///
/// Only the fields the checks reason about are modeled; anything else in the
/// upstream payload is ignored during decoding, so schema additions upstream
/// do not break the suite.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub cod: i64,
    pub main: MainReadings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: i64,
    pub feels_like: f64,
}
