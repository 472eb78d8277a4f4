use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::{
        time::{DisplayZone, format_time},
        weather::{ForecastEntry, round_temp, weather_glyph},
    },
    ui::{layout::visible_day_count, panel, theme::Theme},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let days = state.forecast_days();
    let title = strip_title(state.forecast_offset, days.len());
    let block = panel(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if days.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("No forecast loaded.", theme.muted())),
            inner,
        );
        return;
    }

    let offset = state.forecast_offset.min(days.len() - 1);
    let shown = &days[offset..(offset + visible_day_count(area.width)).min(days.len())];
    #[allow(clippy::cast_possible_truncation)]
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, shown.len() as u32); shown.len()])
        .split(inner);

    for (day, column) in shown.iter().zip(columns.iter()) {
        let mut lines = vec![Line::styled(
            day.date.clone(),
            theme.text().add_modifier(Modifier::BOLD),
        )];
        for entry in &day.entries {
            lines.push(Line::styled(
                entry_text(entry, state.display_zone(), state.icon_mode),
                theme.text(),
            ));
            lines.push(Line::styled(format!("  {}", entry_details(entry)), theme.muted()));
        }
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

pub(crate) fn strip_title(offset: usize, total: usize) -> String {
    if total == 0 {
        " Forecast ".to_string()
    } else {
        format!(" Forecast · day {} of {} ", offset.min(total - 1) + 1, total)
    }
}

/// `HH:MM glyph temp° Condition` for one three-hour sample.
pub(crate) fn entry_text(entry: &ForecastEntry, zone: DisplayZone, icons: IconMode) -> String {
    format!(
        "{} {} {}° {}",
        format_time(entry.dt, zone),
        weather_glyph(&entry.condition.icon, icons),
        round_temp(entry.temp),
        entry.condition.main
    )
}

/// Pressure and humidity, e.g. `1010 hPa 80%`.
pub(crate) fn entry_details(entry: &ForecastEntry) -> String {
    format!("{} hPa {}%", entry.pressure, entry.humidity)
}
