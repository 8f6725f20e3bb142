//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each UI mode and screen

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use crate::state::DetailInstanceId;
use gatewatch_core::GateCommand;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start the simulated delay for a command. The timer task answers with
    /// `Message::CommandCompleted` carrying the same instance id.
    ScheduleCommand {
        instance_id: DetailInstanceId,
        command: GateCommand,
        delay: Duration,
    },

    /// Abort the timer of a detail instance that was torn down
    CancelCommand { instance_id: DetailInstanceId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    fn cancel(instance_id: Option<DetailInstanceId>) -> Self {
        match instance_id {
            Some(instance_id) => Self::action(UpdateAction::CancelCommand { instance_id }),
            None => Self::none(),
        }
    }
}
