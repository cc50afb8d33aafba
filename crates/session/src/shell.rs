//! Host-side seams the session talks to.

use tetromino_store::StoreError;
use tetromino_types::StatusMessage;

/// Whether the host should keep running after a session call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The player declined to play again
    Quit,
}

/// Receives status line updates.
pub trait StatusSink {
    fn show_status(&mut self, message: &StatusMessage);

    /// A score could not be persisted; play continues with the score unsaved.
    fn report_store_error(&mut self, _error: &StoreError) {}
}

/// Asks the player whether to start a new game.
pub trait RestartPrompt {
    fn confirm_restart(&mut self) -> bool;
}
