//! Keyboard shortcut handling.
//!
//! The form has two input modes. While navigating, letters are shortcuts;
//! while a cell is being edited, printable keys are text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use gradecalc_core::mode::Mode;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextTab,
    SelectTab(Mode),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Start editing the cell under the cursor.
    Edit,
    AddRow,
    RemoveRow,
    Calculate,
    NextGrade,
    PrevGrade,
    ClearCell,
    ToggleTheme,
    CycleScale,
    /// Editing: type a character.
    Input(char),
    /// Editing: delete the last character.
    Backspace,
    /// Editing: store the buffer into the cell.
    Commit,
    /// Editing: drop the buffer.
    CancelEdit,
    None,
}

/// Map a key event to an action. `editing` selects the text-entry keymap.
#[must_use]
pub fn map_key(key: KeyEvent, editing: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if editing {
        return map_editing_key(key);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab | KeyCode::BackTab => KeyAction::NextTab,
        KeyCode::Char('1') => KeyAction::SelectTab(Mode::Gpa),
        KeyCode::Char('2') => KeyAction::SelectTab(Mode::Cgpa),
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::MoveRight,
        KeyCode::Enter | KeyCode::Char('e') => KeyAction::Edit,
        KeyCode::Char('a') => KeyAction::AddRow,
        KeyCode::Char('x') | KeyCode::Delete => KeyAction::RemoveRow,
        KeyCode::Char('c') => KeyAction::Calculate,
        KeyCode::Char(']' | '+') => KeyAction::NextGrade,
        KeyCode::Char('[' | '-') => KeyAction::PrevGrade,
        KeyCode::Backspace => KeyAction::ClearCell,
        KeyCode::Char('t') => KeyAction::ToggleTheme,
        KeyCode::Char('s') => KeyAction::CycleScale,
        _ => KeyAction::None,
    }
}

fn map_editing_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => KeyAction::Commit,
        KeyCode::Esc => KeyAction::CancelEdit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Input(c)
        }
        _ => KeyAction::None,
    }
}
