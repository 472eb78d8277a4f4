//! Plain-text rendering of the dashboard for `--one-shot`.

use std::fmt::Write as _;

use crate::{
    app::state::AppState,
    domain::{
        air_quality::{CAQI_LINK_TEXT, CAQI_URL, Pollutant, reading_text},
        time::format_time,
        weather::{icon_url, round_temp},
    },
    ui::widgets::{forecast::entry_details, sun_info::sun_rows, weather_card::card_lines},
};

#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    let weather = &state.weather;
    let zone = state.display_zone();

    let _ = writeln!(out, "{}", state.location.display_name());
    let _ = writeln!(out, "Icon: {}", icon_url(&weather.condition.icon));

    out.push_str("\nCurrent weather\n");
    for (label, value) in card_lines(weather, state.icon_mode) {
        if label.is_empty() {
            let _ = writeln!(out, "  {value}");
        } else {
            let _ = writeln!(out, "  {label:<11}{value}");
        }
    }

    out.push_str("\nAir pollution\n");
    for pollutant in Pollutant::ALL {
        let reading = state.air_quality.reading(pollutant);
        let _ = writeln!(
            out,
            "  {:<8}{:<8}{}",
            pollutant.label(),
            reading_text(reading),
            pollutant.classify(reading).label()
        );
    }
    let _ = writeln!(out, "  {CAQI_LINK_TEXT}: {CAQI_URL}");

    out.push_str("\nSun\n");
    for (label, value) in sun_rows(weather.sunrise, weather.sunset, zone) {
        let _ = writeln!(out, "  {label:<9}{value}");
    }

    out.push_str("\nForecast\n");
    let days = state.forecast_days();
    if days.is_empty() {
        out.push_str("  No forecast loaded.\n");
    }
    for day in days {
        let _ = writeln!(out, "  {}", day.date);
        for entry in &day.entries {
            let _ = writeln!(
                out,
                "    {} {:>4}°  {} {}",
                format_time(entry.dt, zone),
                round_temp(entry.temp),
                entry.condition.main,
                entry_details(entry)
            );
        }
    }

    let stale = state.stale_slices();
    if !stale.is_empty() {
        let names: Vec<String> = stale.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "\nNot updated: {}", names.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::{
        app::{
            events::AppEvent,
            fetch::{FetchReport, Slice},
        },
        test_support::{
            FIXTURE_MIDNIGHT, fixture_air_quality, fixture_forecast, fixture_weather,
            state_test_cli, stockholm_location,
        },
    };

    #[test]
    fn report_contains_every_panel() {
        let mut state = AppState::new(&state_test_cli());
        let now = Instant::now();
        state.apply(AppEvent::LocationResolved(stockholm_location()), now);
        state.apply(AppEvent::WeatherLoaded(fixture_weather()), now);
        state.apply(AppEvent::AirQualityLoaded(fixture_air_quality()), now);
        state.apply(
            AppEvent::ForecastLoaded(fixture_forecast(FIXTURE_MIDNIGHT, 16)),
            now,
        );

        let text = render(&state);
        assert!(text.starts_with("Stockholm, SE\n"));
        assert!(text.contains("Current weather"));
        assert!(text.contains("  Pressure   1008 hPa"));
        assert!(text.contains("  NO2     21.5    Very low"));
        assert!(text.contains("  Sunrise  07:41"));
        assert!(text.contains("  Read more about Air quality index: https://"));
        assert!(text.contains("\n  12.2.2024\n    00:00   -2°  Snow 1010 hPa 80%\n"));
        assert!(text.contains("\n  13.2.2024\n"));
        assert!(!text.contains("Not updated"));
    }

    #[test]
    fn report_names_failed_slices() {
        let mut state = AppState::new(&state_test_cli());
        state.fetches_in_flight = 1;
        state.apply(
            AppEvent::FetchSettled(FetchReport {
                city: "Oslo".to_string(),
                resolved: true,
                failed: vec![Slice::AirQuality],
            }),
            Instant::now(),
        );
        let text = render(&state);
        assert!(text.contains("No forecast loaded."));
        assert!(text.ends_with("\nNot updated: air quality\n"));
    }
}
