//! Main TUI runner: terminal lifecycle and the event loop

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use gatewatch_app::actions::{self, CommandTaskMap};
use gatewatch_app::message::Message;
use gatewatch_app::process::process_message;
use gatewatch_app::signals;
use gatewatch_app::state::AppState;
use gatewatch_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Capacity of the message channel fed by timers and signals
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the dashboard until the operator quits
pub async fn run(mut state: AppState) -> Result<()> {
    let mut term = terminal::enter()?;

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
    if let Err(e) = signals::spawn_signal_handler(msg_tx.clone()) {
        warn!("{}; the dashboard still quits with q", e);
    }

    let command_tasks: CommandTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

    info!(
        "Dashboard started with {} gates ({} icons)",
        state.catalog.len(),
        state.settings.ui.icons
    );

    let result = run_loop(&mut term, &mut state, &msg_tx, &mut msg_rx, &command_tasks);

    // Pending command timers die with the dashboard
    actions::abort_all(&command_tasks);
    terminal::leave();

    info!("gatewatch exiting");
    result
}

fn run_loop(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
    command_tasks: &CommandTaskMap,
) -> Result<()> {
    let tick_rate = Duration::from_millis(state.settings.ui.tick_rate_ms.max(1));

    while !state.should_quit() {
        // Timer completions and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, command_tasks);
        }
        if state.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Terminal input, or a tick when the poll times out
        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message, msg_tx, command_tasks);
        }
    }

    Ok(())
}
