use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState},
    ui::{panel, theme::Theme},
};

const KEY_HINT: &str = "Enter load · ←/→ scroll · Esc quit";
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel(" skyboard ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                state.location.display_name(),
                theme.text().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(status_text(state), theme.muted()),
        ]),
        Line::from(vec![
            Span::styled("City: ", theme.muted()),
            Span::styled(format!("{}█", state.city_query), theme.text()),
            Span::raw("  "),
            Span::styled(KEY_HINT, theme.muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

pub(crate) fn status_text(state: &AppState) -> String {
    match state.mode {
        AppMode::Loading => {
            #[allow(clippy::cast_possible_truncation)]
            let frame = (state.frame_tick % SPINNER.len() as u64) as usize;
            format!("Loading {}", SPINNER[frame])
        }
        AppMode::Idle | AppMode::Quit => String::new(),
        AppMode::Ready => {
            let stale = state.stale_slices();
            if stale.is_empty() {
                String::new()
            } else {
                let names: Vec<String> = stale.iter().map(ToString::to_string).collect();
                format!("not updated: {}", names.join(", "))
            }
        }
    }
}
