//! Courier - actor-based terminal HTTP client
//!
//! Architecture:
//! - UI Layer (Ratatui) - terminal rendering, forwards raw input
//! - App Layer - central state machine processing events
//! - Network / Storage Layers (Tokio) - async HTTP and file I/O

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use courier_tui::app::AppActor;
use courier_tui::config::AppConfig;
use courier_tui::messages::{AppEvent, NetworkCommand, RenderState, StorageCommand};
use courier_tui::network::{client::create_client, NetworkActor};
use courier_tui::storage::{Storage, StorageActor};
use courier_tui::ui::draw_ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_warnings) = AppConfig::from_env();

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."))
        .to_path_buf();
    let log_name = config
        .log_file
        .file_name()
        .context("Log file path has no file name")?
        .to_owned();
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(requests_dir = %config.requests_dir.display(), timeout = ?config.request_timeout, "Starting");

    let client = create_client(config.request_timeout).context("Failed to build HTTP client")?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (storage_cmd_tx, storage_cmd_rx) = mpsc::unbounded_channel::<StorageCommand>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(client, event_tx.clone());
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn storage actor
    let storage_actor = StorageActor::new(Storage::new(config.requests_dir.clone()), event_tx.clone());
    tokio::spawn(storage_actor.run(storage_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, storage_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(event_rx));

    if let Ok(size) = terminal.size() {
        let _ = event_tx.send(AppEvent::Resize {
            width: size.width,
            height: size.height,
        });
    }

    run_ui_loop(&mut terminal, event_tx, &mut render_rx)?;

    let _ = app_handle.await;
    tracing::info!("Exiting");

    Ok(())
}

/// Run the UI rendering loop until the App actor stops publishing state
fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Check for state updates (non-blocking)
        loop {
            match render_rx.try_recv() {
                Ok(state) => current_state = state,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let forwarded = match event::read()? {
                Event::Key(key) => event_tx.send(AppEvent::Key(key)),
                Event::Resize(width, height) => event_tx.send(AppEvent::Resize { width, height }),
                _ => Ok(()),
            };
            if forwarded.is_err() {
                return Ok(());
            }
        }
    }
}
