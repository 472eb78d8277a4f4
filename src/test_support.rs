use crate::{
    cli::{Cli, ColorArg},
    domain::weather::{
        AirQualitySnapshot, Condition, ForecastEntry, Location, WeatherSnapshot,
    },
};

/// 2024-02-12 00:00:00 UTC.
pub(crate) const FIXTURE_MIDNIGHT: f64 = 1_707_696_000.0;

pub(crate) fn state_test_cli() -> Cli {
    Cli {
        city: None,
        api_key: "test-key".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        utc: true,
        city_time: false,
        ascii_icons: true,
        emoji_icons: false,
        color: ColorArg::Never,
        no_color: false,
        one_shot: false,
        log_file: None,
    }
}

pub(crate) fn stockholm_location() -> Location {
    Location {
        name: "Stockholm".to_string(),
        lat: 59.3293,
        lon: 18.0686,
        country: Some("SE".to_string()),
        state: None,
    }
}

pub(crate) fn condition(main: &str, description: &str, icon: &str) -> Condition {
    Condition {
        main: main.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

pub(crate) fn fixture_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        condition: condition("Clouds", "broken clouds", "04d"),
        temp: Some(-1.6),
        feels_like: Some(-5.2),
        temp_min: Some(-3.0),
        temp_max: Some(0.4),
        humidity: Some(86.0),
        pressure: Some(1008.0),
        wind_speed: 3.6,
        wind_deg: 200.0,
        cloudiness: 75.0,
        // 07:41 and 16:12 UTC
        sunrise: 1_707_723_660,
        sunset: 1_707_754_320,
        timezone: Some(3600),
    }
}

pub(crate) fn fixture_air_quality() -> AirQualitySnapshot {
    AirQualitySnapshot {
        no2: Some(21.5),
        pm10: Some(31.0),
        o3: Some(62.9),
        pm2_5: Some(-1.0),
    }
}

/// `count` three-hourly samples starting at `start`.
pub(crate) fn fixture_forecast(start: f64, count: usize) -> Vec<ForecastEntry> {
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let step = i as f64;
            ForecastEntry {
                dt: start + step * 10_800.0,
                condition: condition("Snow", "light snow", if i % 8 < 4 { "13n" } else { "13d" }),
                temp: -2.0 + step * 0.1,
                pressure: 1010.0,
                humidity: 80.0,
            }
        })
        .collect()
}
