//! # gradecalc-tui
//!
//! Interactive GPA/CGPA form using ratatui with Elm architecture.

pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod result;
pub mod styles;

pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::{Cursor, TuiApp};
pub use styles::{ColorTheme, ThemeKind};
