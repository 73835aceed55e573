//! TUI header panel: title and GPA/CGPA tabs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use gradecalc_core::mode::Mode;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, mode: Mode, scale: &str, theme: &ColorTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let title = Line::from(vec![
        Span::styled("GPA & CGPA Calculator", theme.header_style()),
        Span::styled(format!(" | scale: {scale}"), theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    let titles: Vec<Line> = Mode::ALL.iter().map(|m| Line::from(m.label())).collect();
    let tabs = Tabs::new(titles)
        .select(mode.index())
        .style(theme.text_style())
        .highlight_style(theme.selected_style())
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border_style()),
        );
    frame.render_widget(tabs, rows[1]);
}
