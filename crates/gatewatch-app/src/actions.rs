//! Action handlers: UpdateAction dispatch and command timer tasks

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::DetailInstanceId;
use gatewatch_core::prelude::*;
use gatewatch_core::GateCommand;

/// Convenience type alias for command timer tracking
pub type CommandTaskMap = Arc<std::sync::Mutex<HashMap<DetailInstanceId, JoinHandle<()>>>>;

/// Execute an action by spawning or aborting a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    command_tasks: &CommandTaskMap,
) {
    match action {
        UpdateAction::ScheduleCommand {
            instance_id,
            command,
            delay,
        } => spawn_command_timer(instance_id, command, delay, msg_tx, command_tasks),

        UpdateAction::CancelCommand { instance_id } => {
            cancel_command_timer(instance_id, command_tasks);
        }
    }
}

fn spawn_command_timer(
    instance_id: DetailInstanceId,
    command: GateCommand,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    command_tasks: &CommandTaskMap,
) {
    let tasks_clone = command_tasks.clone();

    // Hold the lock across spawn so the task cannot untrack itself before
    // it has been tracked.
    let mut guard = match command_tasks.lock() {
        Ok(guard) => guard,
        Err(e) => {
            warn!("Command task map poisoned, not scheduling {}: {}", command, e);
            return;
        }
    };

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        // Untrack before reporting so a follow-up command on the same
        // instance is never removed by this task.
        if let Ok(mut guard) = tasks_clone.lock() {
            guard.remove(&instance_id);
        }

        if let Err(e) = msg_tx
            .send(Message::CommandCompleted {
                instance_id,
                command,
            })
            .await
        {
            debug!("Command completion dropped, loop has stopped: {}", e);
        }
    });

    if let Some(previous) = guard.insert(instance_id, handle) {
        previous.abort();
    }
    debug!(
        "Scheduled {} for detail instance {} in {:?} (tracked: {})",
        command,
        instance_id,
        delay,
        guard.len()
    );
}

fn cancel_command_timer(instance_id: DetailInstanceId, command_tasks: &CommandTaskMap) {
    match command_tasks.lock() {
        Ok(mut guard) => {
            if let Some(handle) = guard.remove(&instance_id) {
                handle.abort();
                debug!("Cancelled command timer for detail instance {}", instance_id);
            }
        }
        Err(e) => warn!("Command task map poisoned, cannot cancel: {}", e),
    }
}

/// Abort every outstanding command timer (shutdown)
pub fn abort_all(command_tasks: &CommandTaskMap) {
    match command_tasks.lock() {
        Ok(mut guard) => {
            let count = guard.len();
            for (_, handle) in guard.drain() {
                handle.abort();
            }
            if count > 0 {
                info!("Aborted {} pending command timer(s)", count);
            }
        }
        Err(e) => warn!("Command task map poisoned at shutdown: {}", e),
    }
}
