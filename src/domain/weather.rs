use serde::Deserialize;

use crate::{cli::IconMode, domain::air_quality::Pollutant};

pub const PLACEHOLDER: &str = "---";

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Location {
    /// Location slice before the first successful lookup.
    #[must_use]
    pub fn unresolved() -> Self {
        Self {
            name: "-----".to_string(),
            lat: 0.0,
            lon: 0.0,
            country: None,
            state: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.state, &self.country) {
            (Some(state), Some(country)) => format!("{}, {}, {}", self.name, state, country),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub main: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
}

impl Default for Condition {
    fn default() -> Self {
        Self {
            main: PLACEHOLDER.to_string(),
            description: PLACEHOLDER.to_string(),
            icon: "01d".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub condition: Condition,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub cloudiness: f64,
    pub sunrise: i64,
    pub sunset: i64,
    /// Shift from UTC in seconds for the observed place.
    pub timezone: Option<i32>,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            condition: Condition::default(),
            temp: None,
            feels_like: None,
            temp_min: None,
            temp_max: None,
            humidity: None,
            pressure: None,
            wind_speed: 0.0,
            wind_deg: 0.0,
            cloudiness: 0.0,
            sunrise: 0,
            sunset: 0,
            timezone: None,
        }
    }
}

/// Most recent pollutant concentrations in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualitySnapshot {
    pub no2: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub pm2_5: Option<f64>,
}

impl Default for AirQualitySnapshot {
    fn default() -> Self {
        Self {
            no2: Some(0.0),
            pm10: Some(0.0),
            o3: Some(0.0),
            pm2_5: Some(0.0),
        }
    }
}

impl AirQualitySnapshot {
    #[must_use]
    pub fn reading(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::No2 => self.no2,
            Pollutant::Pm10 => self.pm10,
            Pollutant::O3 => self.o3,
            Pollutant::Pm25 => self.pm2_5,
        }
    }
}

/// One 3-hour forecast sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastEntry {
    /// Unix seconds.
    pub dt: f64,
    pub condition: Condition,
    pub temp: f64,
    /// hPa.
    pub pressure: f64,
    /// Percent.
    pub humidity: f64,
}

#[must_use]
pub fn metric_text(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v}"))
}

#[must_use]
pub fn round_temp(value: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    rounded
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a bearing in degrees.
///
/// Each sector spans 22.5° and includes its upper edge, so 11.25 is still
/// north and 11.26 is north-north-east. Bearings outside 0..=360 give `""`.
#[must_use]
pub fn compass_direction(deg: f64) -> &'static str {
    if !(0.0..=360.0).contains(&deg) {
        return "";
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = ((deg - 11.25) / 22.5).ceil().max(0.0) as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[sector]
}

#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@2x.png")
}

/// Terminal glyph for an OpenWeatherMap icon id such as `10n`.
#[must_use]
pub fn weather_glyph(icon: &str, mode: IconMode) -> &'static str {
    let is_night = icon.ends_with('n');
    let family = icon.get(..2).unwrap_or_default();
    match mode {
        IconMode::Ascii => match family {
            "01" if is_night => "MON",
            "01" => "SUN",
            "02" => "PCL",
            "03" | "04" => "CLD",
            "09" => "SHW",
            "10" => "RAN",
            "11" => "THN",
            "13" => "SNW",
            "50" => "FOG",
            _ => "---",
        },
        IconMode::Emoji => match family {
            "01" if is_night => "🌙",
            "01" => "☀️",
            "02" => "⛅",
            "03" | "04" => "☁️",
            "09" => "🌦️",
            "10" => "🌧️",
            "11" => "⛈️",
            "13" => "🌨️",
            "50" => "🌫️",
            _ => "☁️",
        },
        IconMode::Unicode => match family {
            "01" if is_night => "☾",
            "01" => "☀",
            "02" => "⛅",
            "03" | "04" => "☁",
            "09" | "10" => "☂",
            "11" => "⚡",
            "13" => "❄",
            "50" => "░",
            _ => "☁",
        },
    }
}
