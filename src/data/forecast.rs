use serde::Deserialize;

use crate::{
    data::client::{FetchError, OpenWeatherClient, coords_query},
    domain::weather::{Condition, ForecastEntry, Location},
};

const FORECAST_PATH: &str = "/data/2.5/forecast";

impl OpenWeatherClient {
    /// Five days of 3-hour samples, oldest first.
    pub async fn forecast(&self, location: &Location) -> Result<Vec<ForecastEntry>, FetchError> {
        let mut query = coords_query(location.lat, location.lon);
        query.push(("units", "metric".to_string()));
        let payload: ForecastResponse = self.get_json("forecast", FORECAST_PATH, &query).await?;
        Ok(parse_entries(payload.list))
    }
}

fn parse_entries(list: Vec<ForecastItem>) -> Vec<ForecastEntry> {
    list.into_iter()
        .map(|item| ForecastEntry {
            dt: item.dt,
            condition: item.weather.into_iter().next().unwrap_or_default(),
            temp: item.main.temp,
            pressure: item.main.pressure.unwrap_or_default(),
            humidity: item.main.humidity.unwrap_or_default(),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: f64,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
    pressure: Option<f64>,
    humidity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_upstream_order_and_fields() {
        let body = r#"{
            "cod": "200",
            "cnt": 2,
            "list": [
                {"dt": 1707739200, "main": {"temp": 2.4, "feels_like": -1.0, "pressure": 1012, "humidity": 80},
                 "weather": [{"main": "Snow", "description": "light snow", "icon": "13d"}],
                 "wind": {"speed": 4.1, "deg": 200}},
                {"dt": 1707750000, "main": {"temp": 1.6},
                 "weather": [{"main": "Clouds", "description": "overcast clouds", "icon": "04n"}]}
            ],
            "city": {"name": "Stockholm", "timezone": 3600}
        }"#;
        let payload: ForecastResponse = serde_json::from_str(body).expect("payload");
        let entries = parse_entries(payload.list);

        assert_eq!(entries.len(), 2);
        assert!(entries[0].dt < entries[1].dt);
        assert_eq!(entries[0].condition.main, "Snow");
        assert!((entries[0].pressure - 1012.0).abs() < f64::EPSILON);
        assert!((entries[0].humidity - 80.0).abs() < f64::EPSILON);
        assert!(entries[1].pressure.abs() < f64::EPSILON);
        assert_eq!(entries[1].condition.icon, "04n");
    }
}
