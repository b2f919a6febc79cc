//! Error-path checks: upstream 404/401 answers, typed-fetch failures,
//! transport errors, and the credential probe.

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_client::validate::assert_error;
use weather_client::{ClientConfig, ClientError, WeatherClient};

mod common;
use common::{
    TEST_API_KEY, error_body, mount_weather_mock, sample_weather_body, test_client, test_config,
};

#[tokio::test]
async fn unknown_city_returns_404_with_message() {
    let server = MockServer::start().await;

    mount_weather_mock(
        &server,
        ResponseTemplate::new(404).set_body_json(error_body("404", "city not found")),
    )
    .await;

    let client = test_client(&server);
    let response = client
        .fetch_by_name("NonExistentCity123", None, None)
        .await
        .expect("a 404 is a normal response, not an error");

    assert_eq!(response.status(), 404);
    assert_error(&response, 404, "not found").expect("error contract should hold");
}

#[tokio::test]
async fn empty_api_key_override_returns_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("appid", ""))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body(
            "401",
            "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .fetch_by_name("London", Some("UK"), Some(""))
        .await
        .expect("a 401 is a normal response, not an error");

    assert_eq!(response.status(), 401);
    assert_error(&response, 401, "Invalid API key").expect("error contract should hold");
}

#[tokio::test]
async fn typed_fetch_on_404_carries_status_and_body() {
    let server = MockServer::start().await;

    mount_weather_mock(
        &server,
        ResponseTemplate::new(404).set_body_json(error_body("404", "city not found")),
    )
    .await;

    let client = test_client(&server);
    let err = client
        .fetch_by_name_typed("NonExistentCity123", None)
        .await
        .expect_err("typed fetch must fail on a 404");

    match err {
        ClientError::RequestFailed { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("city not found"), "body was: {body}");
        }
        other => panic!("expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn typed_fetch_on_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    mount_weather_mock(&server, ResponseTemplate::new(200).set_body_string("not valid json"))
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_by_name_typed("London", None)
        .await
        .expect_err("typed fetch must fail on a malformed body");

    assert!(matches!(err, ClientError::Decode(_)), "expected Decode, got: {err:?}");
}

#[tokio::test]
async fn slow_response_surfaces_as_network_error() {
    let server = MockServer::start().await;

    mount_weather_mock(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(sample_weather_body("London", 51.51, -0.13))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let mut config = test_config(&server);
    config.timeout_ms = 100;
    let client = WeatherClient::new(config).expect("client should build");

    let err = client
        .fetch_by_name("London", None, None)
        .await
        .expect_err("timeout must surface as an error");

    assert!(matches!(err, ClientError::Network(_)), "expected Network, got: {err:?}");
}

#[tokio::test]
async fn key_probe_accepts_a_200() {
    let server = MockServer::start().await;

    mount_weather_mock(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_weather_body("London", 51.51, -0.13)),
    )
    .await;

    let client = test_client(&server);
    assert!(client.validate_api_key().await);
}

#[tokio::test]
async fn key_probe_rejects_a_401() {
    let server = MockServer::start().await;

    mount_weather_mock(
        &server,
        ResponseTemplate::new(401).set_body_json(error_body("401", "Invalid API key")),
    )
    .await;

    let client = test_client(&server);
    assert!(!client.validate_api_key().await);
}

#[tokio::test]
async fn key_probe_treats_a_500_as_valid() {
    let server = MockServer::start().await;

    mount_weather_mock(&server, ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .await;

    // The probe detects credential rejection only; a server-side failure does
    // not mean the key is bad. Pinned here so any change to that contract is
    // a deliberate one.
    let client = test_client(&server);
    assert!(client.validate_api_key().await);
}

#[tokio::test]
async fn key_probe_rejects_an_unreachable_api() {
    // Nothing listens on this port.
    let mut config = ClientConfig::new("http://127.0.0.1:1", TEST_API_KEY);
    config.timeout_ms = 500;

    let client = WeatherClient::new(config).expect("client should build");
    assert!(!client.validate_api_key().await);
}
