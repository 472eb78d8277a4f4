pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod report;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::{
    io::{self, Stdout},
    time::Instant,
};

use anyhow::{Context, Result, bail};
use app::events::{AppEvent, spawn_input_task};
use app::fetch::fetch_city;
use app::state::{AppMode, AppState};
use app::toast::NOT_FOUND_MESSAGE;
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use logging::LogTarget;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use ui::theme::{Theme, detect_color_capability};

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    logging::init(&LogTarget::for_cli(&cli))?;

    if cli.one_shot {
        let text = one_shot_report(&cli).await?;
        print!("{text}");
        return Ok(());
    }

    let theme = Theme::for_capability(detect_color_capability(cli.effective_color_mode()));
    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli, theme).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    theme: Theme,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(cli);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app, theme))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Fetches the start-up city once and renders every panel as text.
pub async fn one_shot_report(cli: &Cli) -> Result<String> {
    let city = cli
        .start_city()
        .context("--one-shot needs a CITY argument")?;
    let mut state = AppState::new(cli);
    let (tx, mut rx) = mpsc::channel::<AppEvent>(16);

    let outcome = fetch_city(state.client(), city, &tx).await;
    drop(tx);
    while let Some(event) = rx.recv().await {
        state.apply(event, Instant::now());
    }

    if !outcome.resolved {
        bail!("{NOT_FOUND_MESSAGE} ({city})");
    }
    state.apply(AppEvent::FetchSettled(outcome), Instant::now());
    Ok(report::render(&state))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
