use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if is_quit_key(key) {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match key.code {
            KeyCode::Enter => {
                let query = std::mem::take(&mut self.city_query);
                if !self.submit_city(&query, tx) {
                    self.city_query = query;
                }
            }
            KeyCode::Backspace => {
                self.city_query.pop();
            }
            KeyCode::Left => {
                self.forecast_offset = self.forecast_offset.saturating_sub(1);
            }
            KeyCode::Right => {
                let max_offset = self.forecast_days().len().saturating_sub(1);
                self.forecast_offset = (self.forecast_offset + 1).min(max_offset);
            }
            KeyCode::Char(ch) if is_city_char(ch) && !has_command_modifier(key) => {
                self.city_query.push(ch);
            }
            _ => {}
        }
        Ok(())
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}
