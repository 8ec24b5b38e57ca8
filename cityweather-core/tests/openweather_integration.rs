//! OpenWeather client and service behaviour against a mock HTTP server.

use std::{sync::Arc, time::Duration};

use cityweather_core::{
    ForecastHours, OpenWeatherClient, ProviderSettings, WeatherError, WeatherProvider,
    WeatherService, WeatherTool, WindDirection,
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ProviderSettings {
    ProviderSettings {
        api_key: "TEST_KEY".to_string(),
        base_url: format!("{}/data/2.5", server.uri()),
        lang: "zh_cn".to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn client(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(&settings(server)).unwrap()
}

fn hours(n: u8) -> ForecastHours {
    ForecastHours::new(n).unwrap()
}

fn current_body(city: &str) -> Value {
    json!({
        "coord": { "lon": 116.3972, "lat": 39.9075 },
        "weather": [{ "id": 804, "main": "Clouds", "description": "阴，多云", "icon": "04d" }],
        "main": { "temp": 18.4, "feels_like": 17.6, "pressure": 1021, "humidity": 48 },
        "wind": { "speed": 2.1, "deg": 310 },
        "sys": { "country": "CN" },
        "name": city,
        "dt": 1_700_000_000
    })
}

fn forecast_body(steps: usize) -> Value {
    let list: Vec<Value> = (0..steps)
        .map(|i| {
            json!({
                "dt": 1_700_000_000 + i as i64 * 10_800,
                "main": { "temp": 12.0, "feels_like": 11.0, "pressure": 1015, "humidity": 80 },
                "weather": [{ "description": "多云", "icon": "03n" }],
                "wind": { "speed": 4.0, "deg": 90 }
            })
        })
        .collect();

    json!({
        "cod": "200",
        "city": { "name": "Shanghai", "country": "CN", "coord": { "lat": 31.2222, "lon": 121.4581 } },
        "list": list
    })
}

#[tokio::test]
async fn current_by_city_sends_fixed_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Beijing"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "zh_cn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Beijing")))
        .expect(1)
        .mount(&server)
        .await;

    let env = client(&server).current_by_city("Beijing").await.unwrap();
    assert_eq!(env.name, "Beijing");
    assert_eq!(env.main.pressure, 1021);
}

#[tokio::test]
async fn current_by_coordinates_sends_lat_lon() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "39.96"))
        .and(query_param("lon", "116.3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Haidian")))
        .expect(1)
        .mount(&server)
        .await;

    let env = client(&server).current_by_coordinates(39.96, 116.3).await.unwrap();
    assert_eq!(env.name, "Haidian");
}

#[tokio::test]
async fn forecast_requests_cap_the_step_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "Shanghai"))
        .and(query_param("cnt", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(6)))
        .expect(1)
        .mount(&server)
        .await;

    let env = client(&server).forecast_by_city("Shanghai", hours(6)).await.unwrap();
    assert_eq!(env.list.len(), 6);
}

#[tokio::test]
async fn non_success_status_is_a_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let err = client(&server).current_by_city("Beijing").await.unwrap_err();
    assert!(matches!(err, WeatherError::Rejected { status } if status == StatusCode::UNAUTHORIZED));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).forecast_by_city("Beijing", hours(3)).await.unwrap_err();
    assert!(matches!(err, WeatherError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_provider_is_a_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_body("Beijing"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut slow = settings(&server);
    slow.timeout = Duration::from_millis(200);
    let client = OpenWeatherClient::new(&slow).unwrap();

    let err = client.current_by_city("Beijing").await.unwrap_err();
    assert!(matches!(err, WeatherError::Timeout(_)), "got {err:?}");
    assert!(err.is_transport());
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    let settings = ProviderSettings {
        api_key: "TEST_KEY".to_string(),
        base_url: "http://127.0.0.1:1/data/2.5".to_string(),
        lang: "zh_cn".to_string(),
        timeout: Duration::from_secs(5),
    };

    let client = OpenWeatherClient::new(&settings).unwrap();
    let err = client.current_by_city("Beijing").await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

fn assert_key_hidden(err: &WeatherError, key: &str) {
    let mut rendered = vec![err.to_string(), format!("{err:?}"), err.user_message()];
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        rendered.push(inner.to_string());
        source = inner.source();
    }
    for text in rendered {
        assert!(!text.contains(key), "api key leaked: {text}");
    }
}

#[tokio::test]
async fn transport_errors_do_not_expose_the_api_key() {
    let settings = ProviderSettings {
        api_key: "SECRET_KEY_123".to_string(),
        base_url: "http://127.0.0.1:1/data/2.5".to_string(),
        lang: "zh_cn".to_string(),
        timeout: Duration::from_secs(5),
    };

    let client = OpenWeatherClient::new(&settings).unwrap();
    let err = client.current_by_city("Beijing").await.unwrap_err();
    assert!(matches!(err, WeatherError::Transport(_)), "got {err:?}");
    assert_key_hidden(&err, "SECRET_KEY_123");
}

#[tokio::test]
async fn timeouts_do_not_expose_the_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body(3))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut slow = settings(&server);
    slow.api_key = "SECRET_KEY_123".to_string();
    slow.timeout = Duration::from_millis(200);
    let client = OpenWeatherClient::new(&slow).unwrap();

    let err = client.forecast_by_city("Beijing", hours(3)).await.unwrap_err();
    assert!(matches!(err, WeatherError::Timeout(_)), "got {err:?}");
    assert_key_hidden(&err, "SECRET_KEY_123");
}

#[tokio::test]
async fn district_name_resolves_to_parent_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Beijing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Beijing")))
        .expect(1)
        .mount(&server)
        .await;

    let service = WeatherService::from_settings(&settings(&server)).unwrap();
    let snap = service.current("北京海淀").await.unwrap();

    assert_eq!(snap.location.city, "Beijing");
    assert_eq!(snap.current.wind_direction, WindDirection::NW);
    assert_eq!(snap.current.description, "阴，多云");
}

#[tokio::test]
async fn forecast_end_to_end_truncates() {
    let server = MockServer::start().await;

    // The provider may ignore `cnt`; truncation must still hold.
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "Shanghai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .mount(&server)
        .await;

    let service = WeatherService::from_settings(&settings(&server)).unwrap();
    let snap = service.forecast("上海浦东", hours(5)).await.unwrap();

    assert_eq!(snap.steps.len(), 5);
    assert!(snap.steps.iter().all(|s| s.conditions.wind_direction == WindDirection::E));
}

#[tokio::test]
async fn tool_reports_provider_failure_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider: Arc<dyn WeatherProvider> = Arc::new(client(&server));
    let tool = WeatherTool::new(WeatherService::new(provider));

    let text = tool.call(json!({ "location": "Beijing" })).await.unwrap();
    assert!(text.starts_with("❌"));
    assert!(text.contains("500"));
}
