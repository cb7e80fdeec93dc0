//! HTTP-level tests for the WeatherAPI client against a mock server,
//! covering the success path and how responses map onto the fetch
//! error taxonomy.

use citywx_core::{FetchError, WeatherApiProvider, WeatherProvider};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn provider_for(server: &MockServer) -> WeatherApiProvider {
    WeatherApiProvider::new("TEST_KEY".to_string()).with_base_url(server.uri())
}

fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Paris",
            "region": "Ile-de-France",
            "country": "France",
            "lat": 48.87,
            "lon": 2.33,
            "tz_id": "Europe/Paris",
            "localtime_epoch": 1717000200,
            "localtime": "2024-05-29 18:30"
        },
        "current": {
            "last_updated_epoch": 1716999900,
            "last_updated": "2024-05-29 18:25",
            "temp_c": 18.0,
            "temp_f": 64.4,
            "is_day": 1,
            "condition": {
                "text": "Partly cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                "code": 1003
            },
            "wind_kph": 11.2,
            "humidity": 60,
            "cloud": 50
        }
    })
}

#[tokio::test]
async fn current_parses_a_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&server)
        .await;

    let report = provider_for(&server).current("Paris").await.unwrap();

    assert_eq!(report.location.name, "Paris");
    assert_eq!(report.location.region, "Ile-de-France");
    assert_eq!(report.location.country, "France");
    assert_eq!(report.temp_c, 18.0);
    assert_eq!(report.condition, "Partly cloudy");
    assert_eq!(report.observed_at.timestamp(), 1716999900);
}

#[tokio::test]
async fn unknown_city_surfaces_not_found_with_the_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .current("Nowhereville")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::NotFound(_)));
    assert_eq!(err.to_string(), "No matching location found.");
}

#[tokio::test]
async fn rejected_key_surfaces_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 2008, "message": "API key has been disabled." }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).current("Paris").await.unwrap_err();

    assert!(matches!(err, FetchError::Provider(_)));
    assert_eq!(err.to_string(), "API key has been disabled.");
}

#[tokio::test]
async fn malformed_payload_surfaces_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = provider_for(&server).current("Paris").await.unwrap_err();

    assert!(matches!(err, FetchError::Provider(_)));
    assert!(err.to_string().contains("unexpected response"));
}

#[tokio::test]
async fn long_non_ascii_error_body_surfaces_a_provider_error() {
    let server = MockServer::start().await;

    // 300 bytes of 3-byte chars, so a naive byte cut would land
    // mid-character when the message is truncated for display.
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("€".repeat(100)))
        .mount(&server)
        .await;

    let err = provider_for(&server).current("Paris").await.unwrap_err();

    assert!(matches!(err, FetchError::Provider(_)));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_a_network_error() {
    // Bind a listener to grab a free port, then close it so the
    // connection is refused. (A dropped wiremock `MockServer` goes
    // back to a shared pool and keeps answering on its port, so it
    // cannot simulate an unreachable endpoint.)
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let provider = WeatherApiProvider::new("TEST_KEY".to_string()).with_base_url(uri);
    let err = provider.current("Paris").await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}
