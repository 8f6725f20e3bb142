//! OS signals as quit messages
//!
//! An interrupt goes through the same path as the `q` key, so a gate command
//! still in flight raises the quit confirmation. A terminate request, or any
//! second signal, quits without asking.

use tokio::sync::mpsc;

use crate::message::Message;
use gatewatch_core::prelude::*;

/// Signals the dashboard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl ShutdownSignal {
    /// Message sent for the first signal received
    pub fn first_message(self) -> Message {
        match self {
            ShutdownSignal::Interrupt => Message::RequestQuit,
            ShutdownSignal::Terminate => Message::Quit,
        }
    }
}

/// Install the signal listeners and forward signals into the message channel.
///
/// Listeners are registered before this returns. The forwarding task ends
/// when the channel closes.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> Result<()> {
    let mut listener = SignalListener::install()?;

    tokio::spawn(async move {
        let mut seen = false;
        while let Some(signal) = listener.next().await {
            let msg = if seen {
                Message::Quit
            } else {
                signal.first_message()
            };
            seen = true;

            info!("Received {:?}, sending {:?}", signal, msg);
            if tx.send(msg).await.is_err() {
                debug!("Message channel closed, signal handler exiting");
                break;
            }
        }
    });

    Ok(())
}

#[cfg(unix)]
struct SignalListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalListener {
    fn install() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt())
            .map_err(|e| Error::signal(format!("SIGINT: {}", e)))?;
        let terminate = signal(SignalKind::terminate())
            .map_err(|e| Error::signal(format!("SIGTERM: {}", e)))?;

        Ok(Self {
            interrupt,
            terminate,
        })
    }

    async fn next(&mut self) -> Option<ShutdownSignal> {
        tokio::select! {
            received = self.interrupt.recv() => received.map(|()| ShutdownSignal::Interrupt),
            received = self.terminate.recv() => received.map(|()| ShutdownSignal::Terminate),
        }
    }
}

#[cfg(windows)]
struct SignalListener {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(windows)]
impl SignalListener {
    fn install() -> Result<Self> {
        let ctrl_c = tokio::signal::windows::ctrl_c()
            .map_err(|e| Error::signal(format!("Ctrl+C: {}", e)))?;
        Ok(Self { ctrl_c })
    }

    async fn next(&mut self) -> Option<ShutdownSignal> {
        self.ctrl_c.recv().await.map(|()| ShutdownSignal::Interrupt)
    }
}
