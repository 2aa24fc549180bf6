mod app;
mod components;
mod config;
mod data;
mod logging;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::ui::hit::HitMap;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;
    info!(path = %config::config_path().display(), "config loaded");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = Duration::from_millis(cfg.ui.tick_ms);

    let mut state = AppState::new(cfg, Instant::now());
    let mut hits = HitMap::new();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            match event {
                Ok(event) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "terminal event stream failed");
                    break;
                }
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state, &mut hits))?;
    state.dirty = false;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let now = Instant::now();
        let actions = handler::handle_event(&mut state, event, &hits, now);
        for action in actions {
            handler::apply_action(&mut state, action, now);
        }

        if state.should_quit {
            info!("quit requested");
            break;
        }

        if state.dirty {
            terminal.draw(|f| ui::render(f, &state, &mut hits))?;
            state.dirty = false;
        }
    }

    Ok(())
}
