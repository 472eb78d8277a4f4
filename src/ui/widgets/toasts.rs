use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{app::state::AppState, ui::theme::Theme};

const TOAST_HEIGHT: u16 = 3;

/// Stacks live toasts upwards from the bottom-left corner of `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let mut bottom = area.bottom();
    for toast in state.toasts.iter() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        #[allow(clippy::cast_possible_truncation)]
        let width = (toast.message.chars().count() as u16 + 4).min(area.width);
        let slot = Rect {
            x: area.x,
            y: bottom - TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        let style = theme.toast(toast.kind);
        frame.render_widget(Clear, slot);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            slot,
        );
        bottom = slot.y;
    }
}
