use serde::Deserialize;

use crate::{
    data::client::{FetchError, OpenWeatherClient, coords_query},
    domain::weather::{Condition, Location, WeatherSnapshot},
};

const WEATHER_PATH: &str = "/data/2.5/weather";

impl OpenWeatherClient {
    pub async fn current(&self, location: &Location) -> Result<WeatherSnapshot, FetchError> {
        let mut query = coords_query(location.lat, location.lon);
        query.push(("units", "metric".to_string()));
        let payload: CurrentResponse = self.get_json("weather", WEATHER_PATH, &query).await?;
        Ok(payload.into_snapshot())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainBlock,
    #[serde(default)]
    wind: WindBlock,
    #[serde(default)]
    clouds: CloudsBlock,
    #[serde(default)]
    sys: SysBlock,
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: Option<f64>,
    feels_like: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    pressure: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Default, Deserialize)]
struct CloudsBlock {
    #[serde(default)]
    all: f64,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

impl CurrentResponse {
    fn into_snapshot(self) -> WeatherSnapshot {
        WeatherSnapshot {
            condition: self.weather.into_iter().next().unwrap_or_default(),
            temp: self.main.temp,
            feels_like: self.main.feels_like,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
            wind_deg: self.wind.deg,
            cloudiness: self.clouds.all,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
            timezone: self.timezone,
        }
    }
}
