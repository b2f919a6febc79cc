#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_client::{ClientConfig, WeatherClient};

pub const TEST_API_KEY: &str = "TEST_KEY";

/// Client pointed at the mock server with the standard test key.
pub fn test_client(server: &MockServer) -> WeatherClient {
    WeatherClient::new(test_config(server)).expect("client should build")
}

pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri(), TEST_API_KEY)
}

/// Mount a catch-all mock for the weather endpoint.
pub async fn mount_weather_mock(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET")).and(path("/weather")).respond_with(response).mount(server).await;
}

/// A realistic current-weather payload, including fields the typed model
/// does not know about.
pub fn sample_weather_body(city: &str, lat: f64, lon: f64) -> Value {
    json!({
        "coord": {"lon": lon, "lat": lat},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 11.3,
            "feels_like": 10.6,
            "temp_min": 9.8,
            "temp_max": 12.4,
            "pressure": 1012,
            "humidity": 76
        },
        "visibility": 10000,
        "wind": {"speed": 4.1, "deg": 240},
        "clouds": {"all": 75},
        "dt": 1724900000,
        "sys": {"type": 2, "id": 2075535, "country": "GB",
                "sunrise": 1724850000, "sunset": 1724898000},
        "timezone": 0,
        "id": 2643743,
        "name": city,
        "cod": 200
    })
}

/// The upstream error schema: `cod` plus a human-readable `message`.
pub fn error_body(cod: &str, message: &str) -> Value {
    json!({"cod": cod, "message": message})
}
