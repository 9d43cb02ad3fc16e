//! Main event loop: host bootstrap, draw, poll, update.

use std::time::Duration;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use sysdeck_app::{forward_host_events, process_message, AppState, Message, Settings};
use sysdeck_core::prelude::*;
use sysdeck_host::{HostConnection, HostHandle};

use crate::{event, render, terminal};

/// How long the loop lingers after a termination request so the exit frame
/// reaches the host before the runtime is torn down.
const EXIT_FLUSH_GRACE: Duration = Duration::from_millis(50);

/// Connect to the host runtime and run the panel until termination.
///
/// Connecting happens exactly once, before the terminal is touched; a
/// connection failure is returned as-is and is fatal.
pub async fn run(settings: Settings) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel(32);
    let host = HostConnection::connect(&settings.host_url, event_tx).await?;

    let (msg_tx, msg_rx) = mpsc::channel(256);
    forward_host_events(event_rx, msg_tx.clone());

    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, host, msg_tx, msg_rx, &settings).await;
    ratatui::restore();

    result
}

async fn run_loop(
    terminal: &mut DefaultTerminal,
    host: HostHandle,
    msg_tx: mpsc::Sender<Message>,
    mut msg_rx: mpsc::Receiver<Message>,
    settings: &Settings,
) -> Result<()> {
    let mut state = AppState::new();
    let copy_feedback = settings.copy_feedback();

    while !state.phase.is_quitting() {
        terminal.draw(|frame| render::view(frame, &state))?;

        // Terminal input (or an idle tick) first, then everything the
        // background tasks posted since the last iteration.
        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &host, &msg_tx, copy_feedback);
        }
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &host, &msg_tx, copy_feedback);
        }
    }

    info!("Termination requested, leaving event loop");

    // In-flight loader calls are abandoned, not awaited; only the exit
    // request itself gets a moment to flush.
    tokio::time::sleep(EXIT_FLUSH_GRACE).await;

    Ok(())
}
