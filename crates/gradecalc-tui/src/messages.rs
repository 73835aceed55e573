//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Pasted text, inserted into the cell being edited.
    Paste(String),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic redraws.
    Tick,
    /// Quit the application.
    Quit,
}
