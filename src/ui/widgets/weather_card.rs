use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::weather::{WeatherSnapshot, compass_direction, metric_text, weather_glyph},
    ui::{panel, theme::Theme},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel(" Current weather ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = card_lines(&state.weather, state.icon_mode)
        .into_iter()
        .enumerate()
        .map(|(idx, (label, value))| {
            if idx == 0 {
                Line::from(Span::styled(
                    value,
                    theme.text().add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!("{label:<11}"), theme.muted()),
                    Span::styled(value, theme.text()),
                ])
            }
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Label/value rows; the first row is the headline and has no label.
pub(crate) fn card_lines(weather: &WeatherSnapshot, icons: IconMode) -> Vec<(&'static str, String)> {
    let glyph = weather_glyph(&weather.condition.icon, icons);
    vec![
        (
            "",
            format!(
                "{glyph} {}°C  {}",
                metric_text(weather.temp),
                weather.condition.main
            ),
        ),
        ("", weather.condition.description.clone()),
        ("Feels like", format!("{}°C", metric_text(weather.feels_like))),
        (
            "Min / max",
            format!(
                "{}°C / {}°C",
                metric_text(weather.temp_min),
                metric_text(weather.temp_max)
            ),
        ),
        ("Humidity", format!("{}%", metric_text(weather.humidity))),
        ("Pressure", format!("{} hPa", metric_text(weather.pressure))),
        (
            "Wind",
            format!(
                "{} m/s {}",
                weather.wind_speed,
                compass_direction(weather.wind_deg)
            )
            .trim_end()
            .to_string(),
        ),
        ("Clouds", format!("{}%", weather.cloudiness)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_weather;

    #[test]
    fn placeholder_snapshot_renders_dashes() {
        let lines = card_lines(&WeatherSnapshot::default(), IconMode::Ascii);
        assert_eq!(lines[0].1, "SUN ---°C  ---");
        assert_eq!(lines[2].1, "---°C");
        assert_eq!(lines[6].1, "0 m/s N");
    }

    #[test]
    fn loaded_snapshot_shows_compass_and_units() {
        let lines = card_lines(&fixture_weather(), IconMode::Ascii);
        assert_eq!(lines[0].1, "CLD -1.6°C  Clouds");
        assert_eq!(lines[1].1, "broken clouds");
        assert_eq!(lines[3].1, "-3°C / 0.4°C");
        assert_eq!(lines[5].1, "1008 hPa");
        assert_eq!(lines[6].1, "3.6 m/s SSW");
        assert_eq!(lines[7].1, "75%");
    }
}
