use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    app::state::AppState,
    domain::air_quality::{CAQI_LINK_TEXT, CAQI_URL, Pollutant, reading_text},
    ui::{panel, theme::Theme},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel(" Air pollution ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let header = Row::new(["Pollutant", "µg/m³", "Index"]).style(theme.muted());
    let rows = Pollutant::ALL.into_iter().map(|pollutant| {
        let reading = state.air_quality.reading(pollutant);
        let tier = pollutant.classify(reading);
        let badge = match theme.tier(tier) {
            Some(color) => Style::default().fg(Color::Black).bg(color),
            None => theme.text(),
        };
        Row::new([
            Cell::from(pollutant.label()).style(theme.text()),
            Cell::from(reading_text(reading)).style(theme.text()),
            Cell::from(format!(" {} ", tier.label())).style(badge),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Min(11),
        ],
    )
    .header(header);
    frame.render_widget(table, parts[0]);

    let footer = vec![
        Line::styled(format!("{CAQI_LINK_TEXT}:"), theme.muted()),
        Line::styled(CAQI_URL, theme.muted()),
    ];
    frame.render_widget(Paragraph::new(footer), parts[1]);
}
