//! The editable form table for the active tab.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use gradecalc_core::entry::{Entry, Field};
use gradecalc_core::mode::Mode;
use gradecalc_core::numeric::is_numeric;
use gradecalc_core::store::EntryList;

use crate::model::Cursor;
use crate::styles::ColorTheme;

/// Placeholder shown in an empty cell.
fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Course name",
        Field::Grade => "Select grade",
        Field::Credits => "Credits",
        Field::Gpa => "GPA",
    }
}

fn columns(mode: Mode) -> &'static [Field] {
    match mode {
        Mode::Gpa => &Field::COURSE,
        Mode::Cgpa => &Field::SEMESTER,
    }
}

fn widths(mode: Mode) -> Vec<Constraint> {
    let mut widths = vec![Constraint::Length(4)];
    match mode {
        Mode::Gpa => widths.extend([
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(10),
        ]),
        Mode::Cgpa => widths.extend([Constraint::Length(12), Constraint::Length(12)]),
    }
    widths
}

fn cell<'a>(
    entry: &'a Entry,
    field: Field,
    selected: bool,
    editing: Option<&'a str>,
    theme: &ColorTheme,
) -> Cell<'a> {
    if let (true, Some(buffer)) = (selected, editing) {
        return Cell::from(Line::from(vec![
            Span::raw(buffer),
            Span::raw("_"),
        ]))
        .style(theme.editing_style());
    }

    let text = entry.field_text(field).unwrap_or_default();
    let style = if text.is_empty() {
        theme.muted_style()
    } else if matches!(field, Field::Credits | Field::Gpa) && !is_numeric(text) {
        theme.error_style()
    } else {
        theme.text_style()
    };
    let shown = if text.is_empty() {
        placeholder(field)
    } else {
        text
    };
    let style = if selected {
        style.patch(theme.selected_style())
    } else {
        style
    };
    Cell::from(shown).style(style)
}

/// Render the rows of `list` with the cursor cell highlighted.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    list: &EntryList,
    mode: Mode,
    cursor: Cursor,
    editing: Option<&str>,
    theme: &ColorTheme,
) {
    let fields = columns(mode);
    let header = Row::new(
        std::iter::once(Cell::from("#"))
            .chain(fields.iter().map(|f| Cell::from(f.label())))
            .collect::<Vec<_>>(),
    )
    .style(theme.header_style());

    let rows: Vec<Row> = list
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let number = Cell::from(format!("{:>2}", i + 1)).style(theme.muted_style());
            let cells = entry.fields().iter().enumerate().map(|(col, field)| {
                let selected = i == cursor.row && col == cursor.column;
                cell(entry, *field, selected, editing, theme)
            });
            Row::new(std::iter::once(number).chain(cells).collect::<Vec<_>>())
        })
        .collect();

    let title = format!(" {} rows: {} ", mode.row_noun(), list.len());
    let table = Table::new(rows, widths(mode))
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(title),
        );

    let mut state = TableState::default().with_selected((!list.is_empty()).then_some(cursor.row));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradecalc_core::entry::{CourseEntry, SemesterEntry};
    use gradecalc_core::grade::Grade;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(list: &EntryList, mode: Mode, cursor: Cursor, editing: Option<&str>) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_form(frame, area, list, mode, cursor, editing, &ColorTheme::dark());
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn blank_course_row_shows_placeholders() {
        let list = EntryList::seeded(Entry::course());
        let screen = draw(&list, Mode::Gpa, Cursor::default(), None);
        assert!(screen.contains("Select grade"));
        assert!(screen.contains("Course rows: 1"));
    }

    #[test]
    fn filled_rows_show_values() {
        let list = EntryList::from(vec![
            Entry::Course(CourseEntry {
                name: "Physics".into(),
                grade: Some(Grade::BPlus),
                credits: "4".into(),
            }),
            Entry::course(),
        ]);
        let screen = draw(&list, Mode::Gpa, Cursor { row: 1, column: 0 }, None);
        assert!(screen.contains("Physics"));
        assert!(screen.contains("B+"));
        assert!(screen.contains(" 2"));
    }

    #[test]
    fn editing_cell_shows_buffer() {
        let list = EntryList::seeded(Entry::semester());
        let screen = draw(&list, Mode::Cgpa, Cursor { row: 0, column: 0 }, Some("3.7"));
        assert!(screen.contains("3.7_"));
    }

    #[test]
    fn semester_columns() {
        let list = EntryList::from(vec![Entry::Semester(SemesterEntry {
            gpa: "3.5".into(),
            credits: "15".into(),
        })]);
        let screen = draw(&list, Mode::Cgpa, Cursor::default(), None);
        assert!(screen.contains("GPA"));
        assert!(screen.contains("Credits"));
        assert!(screen.contains("3.5"));
        assert!(screen.contains("15"));
    }

    #[test]
    fn empty_list_renders() {
        let screen = draw(&EntryList::new(), Mode::Gpa, Cursor::default(), None);
        assert!(screen.contains("Course rows: 0"));
    }
}
