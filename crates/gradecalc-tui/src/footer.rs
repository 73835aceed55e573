//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use gradecalc_core::mode::Mode;

use crate::styles::ColorTheme;

/// Key hints for the current input state.
#[must_use]
pub fn shortcuts(mode: Mode, editing: bool) -> Vec<(&'static str, &'static str)> {
    if editing {
        return vec![("enter", "save"), ("esc", "discard"), ("bksp", "delete")];
    }
    let mut keys = vec![
        ("q", "quit"),
        ("tab", "switch"),
        ("enter", "edit"),
        ("a", "add"),
    ];
    if mode.allows_remove() {
        keys.push(("x", "remove"));
    }
    if mode == Mode::Gpa {
        keys.push(("[ ]", "grade"));
    }
    keys.extend([("c", "calculate"), ("s", "scale"), ("t", "theme")]);
    keys
}

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, mode: Mode, editing: bool, theme: &ColorTheme) {
    let keys = shortcuts(mode, editing);
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, (key, label)) in keys.iter().enumerate() {
        spans.push(Span::styled(*key, theme.key_style()));
        let sep = if i + 1 < keys.len() { " | " } else { "" };
        spans.push(Span::styled(format!(": {label}{sep}"), theme.text_style()));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
