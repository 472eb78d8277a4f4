use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    domain::time::{DisplayZone, daylight_duration, format_time},
    ui::{panel, theme::Theme},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel(" Sun ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = sun_rows(state.weather.sunrise, state.weather.sunset, state.display_zone())
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<9}"), theme.muted()),
                Span::styled(value, theme.text()),
            ])
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn sun_rows(sunrise: i64, sunset: i64, zone: DisplayZone) -> [(&'static str, String); 3] {
    [
        ("Sunrise", format_time(sunrise as f64, zone)),
        ("Sunset", format_time(sunset as f64, zone)),
        ("Daylight", daylight_duration(sunrise, sunset)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_weather;

    #[test]
    fn formats_sun_times_in_display_zone() {
        let weather = fixture_weather();
        let rows = sun_rows(weather.sunrise, weather.sunset, DisplayZone::Utc);
        assert_eq!(rows[0].1, "07:41");
        assert_eq!(rows[1].1, "16:12");
        assert_eq!(rows[2].1, "8h 31m");
    }

    #[test]
    fn unloaded_times_show_epoch() {
        let rows = sun_rows(0, 0, DisplayZone::Utc);
        assert_eq!(rows[0].1, "00:00");
        assert_eq!(rows[2].1, "0h 0m");
    }
}
