pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    ui::{
        layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, PANEL_ROW_HEIGHT, fits},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame, state: &AppState, theme: Theme) {
    let area = frame.area();

    if !fits(area.width, area.height) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("skyboard"));
        frame.render_widget(warning, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(PANEL_ROW_HEIGHT),
            Constraint::Min(6),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);

    widgets::header::render(frame, rows[0], state, theme);
    widgets::weather_card::render(frame, panels[0], state, theme);
    widgets::air_pollution::render(frame, panels[1], state, theme);
    widgets::sun_info::render(frame, panels[2], state, theme);
    widgets::forecast::render(frame, rows[2], state, theme);
    widgets::toasts::render(frame, area, state, theme);
}

pub(crate) fn panel<'a>(title: impl Into<Line<'a>>, theme: Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.title())
        .border_style(theme.border())
}
