//! Result and status panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use gradecalc_core::calculator::CalculationResult;
use gradecalc_core::mode::Mode;
use gradecalc_core::numeric::format_number;

use crate::styles::ColorTheme;

/// Lines shown for the active tab's last calculation.
#[must_use]
pub fn result_lines<'a>(
    mode: Mode,
    result: Option<&CalculationResult>,
    status: Option<&'a str>,
    precision: usize,
    theme: &ColorTheme,
) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(2);
    match result {
        Some(CalculationResult {
            result: Some(v),
            totals,
            scale,
            ..
        }) => {
            lines.push(Line::from(vec![
                Span::styled(format!("Your {mode} is: "), theme.text_style()),
                Span::styled(format!("{v:.precision$}"), theme.success_style()),
                Span::styled(
                    format!(
                        "  ({} credits, {scale} scale)",
                        format_number(totals.total_credits)
                    ),
                    theme.muted_style(),
                ),
            ]));
        }
        Some(_) => lines.push(Line::styled(
            "No result: enter at least one row with credits above zero",
            theme.muted_style(),
        )),
        None => lines.push(Line::styled(
            format!("Press c to calculate your {mode}"),
            theme.muted_style(),
        )),
    }
    if let Some(status) = status {
        lines.push(Line::styled(status, theme.error_style()));
    }
    lines
}

/// Render the result panel.
pub fn render_result(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    result: Option<&CalculationResult>,
    status: Option<&str>,
    precision: usize,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Result ");
    let paragraph = Paragraph::new(result_lines(mode, result, status, precision, theme)).block(block);
    frame.render_widget(paragraph, area);
}
