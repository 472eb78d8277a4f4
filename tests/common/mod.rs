#![allow(dead_code)]

use skyboard::cli::{Cli, ColorArg};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-key";

/// 2024-02-12 00:00:00 UTC.
pub const MIDNIGHT: i64 = 1_707_696_000;

pub fn test_cli(api_url: &str, city: Option<&str>) -> Cli {
    Cli {
        city: city.map(str::to_string),
        api_key: API_KEY.to_string(),
        api_url: api_url.to_string(),
        utc: true,
        city_time: false,
        ascii_icons: true,
        emoji_icons: false,
        color: ColorArg::Never,
        no_color: false,
        one_shot: true,
        log_file: None,
    }
}

pub fn geocode_body() -> &'static str {
    r#"[{"name": "Stockholm", "local_names": {"sv": "Stockholm"},
         "lat": 59.3251, "lon": 18.0711, "country": "SE", "state": "Stockholm County"}]"#
}

pub fn weather_body() -> &'static str {
    r#"{
        "coord": {"lon": 18.0711, "lat": 59.3251},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": -1.6, "feels_like": -5.2, "temp_min": -3, "temp_max": 0.4,
                 "pressure": 1008, "humidity": 86},
        "wind": {"speed": 3.6, "deg": 200},
        "clouds": {"all": 75},
        "dt": 1707739200,
        "sys": {"country": "SE", "sunrise": 1707723660, "sunset": 1707754320},
        "timezone": 3600,
        "name": "Stockholm",
        "cod": 200
    }"#
}

pub fn air_pollution_body() -> &'static str {
    r#"{"coord": {"lon": 18.0711, "lat": 59.3251},
        "list": [{"main": {"aqi": 2},
                  "components": {"co": 201.94, "no": 0.01, "no2": 21.5, "o3": 62.9,
                                 "so2": 0.64, "pm2_5": 12.2, "pm10": 31, "nh3": 0.12},
                  "dt": 1707739200}]}"#
}

/// `count` three-hourly samples starting at [`MIDNIGHT`].
pub fn forecast_body(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            let dt = MIDNIGHT + 10_800 * i64::try_from(i).unwrap_or_default();
            format!(
                r#"{{"dt": {dt}, "main": {{"temp": {temp}, "feels_like": -4.0, "pressure": 1010, "humidity": 80}},
                    "weather": [{{"main": "Snow", "description": "light snow", "icon": "13d"}}],
                    "wind": {{"speed": 4.0, "deg": 180}}}}"#,
                temp = -2.0 + f64::from(u32::try_from(i).unwrap_or_default()) * 0.5
            )
        })
        .collect();
    format!(r#"{{"cod": "200", "cnt": {count}, "list": [{}]}}"#, items.join(","))
}

pub fn json(body: impl AsRef<str>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_ref().to_string(), "application/json")
}

pub async fn mount_geocode(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", city))
        .and(query_param("limit", "1"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_endpoint(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts all four endpoints with healthy payloads for Stockholm.
pub async fn mount_happy_path(server: &MockServer) {
    mount_geocode(server, "Stockholm", json(geocode_body())).await;
    mount_endpoint(server, "/data/2.5/weather", json(weather_body())).await;
    mount_endpoint(server, "/data/2.5/air_pollution", json(air_pollution_body())).await;
    mount_endpoint(server, "/data/2.5/forecast", json(forecast_body(40))).await;
}
