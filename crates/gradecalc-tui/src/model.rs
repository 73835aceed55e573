//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Terminal;
use tracing::debug;

use gradecalc_core::calculator::{CalculationResult, Calculator};
use gradecalc_core::entry::{Entry, Field};
use gradecalc_core::grade::Grade;
use gradecalc_core::mode::Mode;
use gradecalc_core::scale::GradeScale;
use gradecalc_core::store::EntryList;

use crate::footer::render_footer;
use crate::form::render_form;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::result::render_result;
use crate::styles::ThemeKind;

/// Position of the highlighted cell within a tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Active tab.
    pub mode: Mode,
    /// Rows of the GPA tab.
    pub courses: EntryList,
    /// Rows of the CGPA tab.
    pub semesters: EntryList,
    /// Cursor per tab, indexed by [`Mode::index`].
    pub cursors: [Cursor; 2],
    /// Text buffer while a cell is being edited.
    pub editing: Option<String>,
    /// Last result per tab.
    pub results: [Option<CalculationResult>; 2],
    /// Last edit error, cleared by the next successful action.
    pub status: Option<String>,
    pub theme: ThemeKind,
    /// Decimal places shown for results.
    pub precision: usize,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    calculator: Calculator,
}

impl TuiApp {
    /// Create a new TUI app with one blank row per tab.
    #[must_use]
    pub fn new(calculator: Calculator, precision: usize) -> Self {
        Self {
            should_quit: false,
            mode: Mode::Gpa,
            courses: EntryList::seeded(Mode::Gpa.template()),
            semesters: EntryList::seeded(Mode::Cgpa.template()),
            cursors: [Cursor::default(); 2],
            editing: None,
            results: [None, None],
            status: None,
            theme: ThemeKind::default(),
            precision,
            terminal_width: 80,
            terminal_height: 24,
            calculator,
        }
    }

    /// Grade scale used by the next calculation.
    #[must_use]
    pub fn scale(&self) -> &GradeScale {
        self.calculator.scale()
    }

    /// Rows of the active tab.
    #[must_use]
    pub fn list(&self) -> &EntryList {
        match self.mode {
            Mode::Gpa => &self.courses,
            Mode::Cgpa => &self.semesters,
        }
    }

    fn list_mut(&mut self) -> &mut EntryList {
        match self.mode {
            Mode::Gpa => &mut self.courses,
            Mode::Cgpa => &mut self.semesters,
        }
    }

    /// Cursor of the active tab.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursors[self.mode.index()]
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursors[self.mode.index()]
    }

    /// Last result of the active tab.
    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        self.results[self.mode.index()].as_ref()
    }

    /// Field under the cursor, if the cursor is on a row.
    #[must_use]
    pub fn selected_field(&self) -> Option<Field> {
        let cursor = self.cursor();
        self.list()
            .get(cursor.row)
            .and_then(|entry| entry.fields().get(cursor.column).copied())
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Paste(text) => {
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.extend(text.chars().filter(|c| !c.is_control()));
                }
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {}
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextTab => self.select_tab(self.mode.toggle()),
            KeyAction::SelectTab(mode) => self.select_tab(mode),
            KeyAction::MoveUp => self.move_row(-1),
            KeyAction::MoveDown => self.move_row(1),
            KeyAction::MoveLeft => self.move_column(-1),
            KeyAction::MoveRight => self.move_column(1),
            KeyAction::Edit => self.begin_edit(),
            KeyAction::AddRow => self.add_row(),
            KeyAction::RemoveRow => self.remove_row(),
            KeyAction::Calculate => self.calculate(),
            KeyAction::NextGrade => self.cycle_grade(true),
            KeyAction::PrevGrade => self.cycle_grade(false),
            KeyAction::ClearCell => self.set_selected(""),
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::CycleScale => self.cycle_scale(),
            KeyAction::Input(c) => {
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.push(c);
                }
            }
            KeyAction::Backspace => {
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyAction::Commit => self.commit_edit(),
            KeyAction::CancelEdit => self.editing = None,
            KeyAction::None => {}
        }
    }

    fn select_tab(&mut self, mode: Mode) {
        self.editing = None;
        self.mode = mode;
    }

    fn move_row(&mut self, delta: isize) {
        let len = self.list().len();
        let cursor = self.cursor_mut();
        cursor.row = cursor
            .row
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
        self.clamp_column();
    }

    fn move_column(&mut self, delta: isize) {
        let cursor = self.cursor_mut();
        cursor.column = cursor.column.saturating_add_signed(delta);
        self.clamp_column();
    }

    fn clamp_column(&mut self) {
        let cursor = self.cursor();
        let width = self
            .list()
            .get(cursor.row)
            .map_or(1, |entry| entry.fields().len());
        self.cursor_mut().column = cursor.column.min(width.saturating_sub(1));
    }

    /// Append a blank row to the active tab and move the cursor onto it.
    pub fn add_row(&mut self) {
        let template = self.mode.template();
        let index = self.list_mut().add(template);
        *self.cursor_mut() = Cursor {
            row: index,
            column: 0,
        };
        self.status = None;
    }

    /// Remove the row under the cursor. Only the GPA tab allows removal.
    pub fn remove_row(&mut self) {
        if !self.mode.allows_remove() {
            self.status = Some(format!("{} rows cannot be removed", self.mode.row_noun()));
            return;
        }
        let row = self.cursor().row;
        match self.list_mut().remove(row) {
            Ok(_) => {
                let len = self.list().len();
                self.cursor_mut().row = row.min(len.saturating_sub(1));
                self.clamp_column();
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Start editing the selected cell with its current text.
    pub fn begin_edit(&mut self) {
        let cursor = self.cursor();
        let text = self.selected_field().and_then(|field| {
            self.list()
                .get(cursor.row)
                .and_then(|entry| entry.field_text(field))
                .map(str::to_string)
        });
        if let Some(text) = text {
            self.editing = Some(text);
        }
    }

    /// Store the edit buffer into the selected cell.
    pub fn commit_edit(&mut self) {
        if let Some(buffer) = self.editing.take() {
            // Typed grades are matched after trimming and upper-casing.
            if self.selected_field() == Some(Field::Grade) {
                self.set_selected(&buffer.trim().to_ascii_uppercase());
            } else {
                self.set_selected(&buffer);
            }
        }
    }

    fn set_selected(&mut self, value: &str) {
        let Some(field) = self.selected_field() else {
            self.status = Some("no row selected".to_string());
            return;
        };
        let row = self.cursor().row;
        match self.list_mut().update(row, field, value) {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn cycle_grade(&mut self, forward: bool) {
        if self.selected_field() != Some(Field::Grade) {
            return;
        }
        let current = self
            .list()
            .get(self.cursor().row)
            .and_then(|entry| match entry {
                Entry::Course(c) => c.grade,
                Entry::Semester(_) => None,
            });
        let next = match (current, forward) {
            (Some(g), true) => g.next(),
            (Some(g), false) => g.prev(),
            (None, true) => Grade::A,
            (None, false) => Grade::F,
        };
        self.set_selected(next.label());
    }

    /// Compute the active tab's average and keep it as that tab's result.
    pub fn calculate(&mut self) {
        let result = self.calculator.calculate(self.mode, self.list());
        self.results[self.mode.index()] = Some(result);
        self.status = None;
    }

    /// Switch to the next built-in grade scale.
    pub fn cycle_scale(&mut self) {
        let names = GradeScale::available();
        let position = names
            .iter()
            .position(|name| *name == self.scale().name())
            .map_or(0, |i| (i + 1) % names.len());
        match GradeScale::by_name(names[position]) {
            Ok(scale) => {
                debug!(scale = scale.name(), "scale changed");
                self.calculator.set_scale(scale);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Split the screen into (header, form, result, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // form
                Constraint::Length(4), // result
                Constraint::Length(3), // footer
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let theme = self.theme.colors();
        frame.render_widget(Block::default().style(theme.base_style()), frame.area());

        let (header_area, form_area, result_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, self.mode, self.scale().name(), &theme);
        render_form(
            frame,
            form_area,
            self.list(),
            self.mode,
            self.cursor(),
            self.editing.as_deref(),
            &theme,
        );
        render_result(
            frame,
            result_area,
            self.mode,
            self.result(),
            self.status.as_deref(),
            self.precision,
            &theme,
        );
        render_footer(frame, footer_area, self.mode, self.editing.is_some(), &theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            let msg = if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => Some(
                        TuiMessage::KeyPress(map_key(key, self.editing.is_some())),
                    ),
                    Event::Paste(text) => Some(TuiMessage::Paste(text)),
                    Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
                    _ => None,
                }
            } else {
                Some(TuiMessage::Tick)
            };

            if let Some(msg) = msg {
                self.handle_message(msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> TuiApp {
        TuiApp::new(Calculator::default(), 2)
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_key_action(KeyAction::Input(c));
        }
    }

    /// Fill the selected row's cells left to right.
    fn fill_row(app: &mut TuiApp, values: &[&str]) {
        app.cursor_mut().column = 0;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                app.handle_key_action(KeyAction::MoveRight);
            }
            app.handle_key_action(KeyAction::Edit);
            app.editing = Some(String::new());
            type_text(app, value);
            app.handle_key_action(KeyAction::Commit);
        }
    }

    #[test]
    fn initial_state() {
        let app = make_app();
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Gpa);
        assert_eq!(app.courses.len(), 1);
        assert_eq!(app.semesters.len(), 1);
        assert!(app.result().is_none());
        assert_eq!(app.cursor(), Cursor::default());
    }

    #[test]
    fn quit_message() {
        let mut app = make_app();
        app.handle_message(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn handle_resize() {
        let mut app = make_app();
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
    }

    #[test]
    fn gpa_scenario() {
        let mut app = make_app();
        fill_row(&mut app, &["Math", "A", "3"]);
        app.handle_key_action(KeyAction::AddRow);
        fill_row(&mut app, &["Art", "B", "2"]);
        app.handle_key_action(KeyAction::Calculate);

        let result = app.result().and_then(|r| r.result).unwrap();
        assert!((result - 3.6).abs() < 1e-9);
    }

    #[test]
    fn cgpa_scenario_keeps_gpa_result() {
        let mut app = make_app();
        fill_row(&mut app, &["Math", "A", "3"]);
        app.handle_key_action(KeyAction::Calculate);

        app.handle_key_action(KeyAction::NextTab);
        assert_eq!(app.mode, Mode::Cgpa);
        assert!(app.result().is_none());
        fill_row(&mut app, &["3.5", "15"]);
        app.handle_key_action(KeyAction::AddRow);
        fill_row(&mut app, &["3.8", "12"]);
        app.handle_key_action(KeyAction::Calculate);

        let cgpa = app.result().and_then(|r| r.result).unwrap();
        assert!((cgpa - 98.1 / 27.0).abs() < 1e-9);

        app.handle_key_action(KeyAction::SelectTab(Mode::Gpa));
        let gpa = app.result().and_then(|r| r.result).unwrap();
        assert!((gpa - 4.0).abs() < 1e-9);
    }

    #[test]
    fn blank_form_has_no_result() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Calculate);
        let result = app.result().unwrap();
        assert!(!result.is_computable());
    }

    #[test]
    fn add_row_moves_cursor() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::AddRow);
        app.handle_key_action(KeyAction::AddRow);
        assert_eq!(app.courses.len(), 3);
        assert_eq!(app.cursor(), Cursor { row: 2, column: 0 });
    }

    #[test]
    fn remove_row_clamps_cursor() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::AddRow);
        app.handle_key_action(KeyAction::RemoveRow);
        assert_eq!(app.courses.len(), 1);
        assert_eq!(app.cursor().row, 0);

        app.handle_key_action(KeyAction::RemoveRow);
        assert!(app.courses.is_empty());
        app.handle_key_action(KeyAction::RemoveRow);
        assert!(app.status.as_deref().unwrap().contains("out of range"));
    }

    #[test]
    fn remove_disabled_in_cgpa() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::SelectTab(Mode::Cgpa));
        app.handle_key_action(KeyAction::RemoveRow);
        assert_eq!(app.semesters.len(), 1);
        assert!(app.status.is_some());
    }

    #[test]
    fn cancel_edit_keeps_value() {
        let mut app = make_app();
        fill_row(&mut app, &["Math"]);
        app.handle_key_action(KeyAction::Edit);
        assert_eq!(app.editing.as_deref(), Some("Math"));
        app.handle_key_action(KeyAction::Backspace);
        app.handle_key_action(KeyAction::CancelEdit);
        assert!(app.editing.is_none());
        assert_eq!(app.courses.get(0).unwrap().field_text(Field::Name), Some("Math"));
    }

    #[test]
    fn paste_appends_to_buffer() {
        let mut app = make_app();
        app.handle_message(TuiMessage::Paste("ignored".into()));
        assert!(app.editing.is_none());

        app.handle_key_action(KeyAction::Edit);
        app.handle_message(TuiMessage::Paste("Chem\n".into()));
        assert_eq!(app.editing.as_deref(), Some("Chem"));
    }

    #[test]
    fn grade_cycling() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::MoveRight);
        assert_eq!(app.selected_field(), Some(Field::Grade));

        app.handle_key_action(KeyAction::NextGrade);
        assert_eq!(app.courses.get(0).unwrap().field_text(Field::Grade), Some("A"));
        app.handle_key_action(KeyAction::NextGrade);
        assert_eq!(app.courses.get(0).unwrap().field_text(Field::Grade), Some("A-"));
        app.handle_key_action(KeyAction::PrevGrade);
        app.handle_key_action(KeyAction::PrevGrade);
        assert_eq!(app.courses.get(0).unwrap().field_text(Field::Grade), Some("F"));

        app.handle_key_action(KeyAction::ClearCell);
        assert_eq!(app.courses.get(0).unwrap().field_text(Field::Grade), Some(""));
    }

    #[test]
    fn grade_cycling_ignored_off_grade_column() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::NextGrade);
        assert_eq!(app.courses.get(0).unwrap().field_text(Field::Grade), Some(""));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::MoveUp);
        app.handle_key_action(KeyAction::MoveLeft);
        assert_eq!(app.cursor(), Cursor::default());
        for _ in 0..5 {
            app.handle_key_action(KeyAction::MoveRight);
            app.handle_key_action(KeyAction::MoveDown);
        }
        assert_eq!(app.cursor(), Cursor { row: 0, column: 2 });

        app.handle_key_action(KeyAction::SelectTab(Mode::Cgpa));
        for _ in 0..5 {
            app.handle_key_action(KeyAction::MoveRight);
        }
        assert_eq!(app.cursor().column, 1);
    }

    #[test]
    fn typed_grade_is_normalized() {
        let mut app = make_app();
        fill_row(&mut app, &["Math", " b+ ", "3"]);
        let row = app.courses.get(0).unwrap();
        assert_eq!(row.field_text(Field::Grade), Some("B+"));
    }

    #[test]
    fn scale_cycles_and_changes_result() {
        let mut app = make_app();
        fill_row(&mut app, &["Math", "A-", "3"]);
        assert_eq!(app.scale().name(), "standard");
        app.handle_key_action(KeyAction::CycleScale);
        assert_eq!(app.scale().name(), "thirds");
        app.handle_key_action(KeyAction::Calculate);
        let value = app.result().and_then(|r| r.result).unwrap();
        assert!((value - 3.66).abs() < 1e-9);
        app.handle_key_action(KeyAction::CycleScale);
        assert_eq!(app.scale().name(), "standard");
    }

    #[test]
    fn theme_toggle() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::ToggleTheme);
        assert_eq!(app.theme, ThemeKind::Light);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, form, result, footer) = TuiApp::compute_layout(area);

        assert_eq!(header.y, 0);
        assert_eq!(header.height, 3);
        assert_eq!(result.height, 4);
        assert_eq!(footer.height, 3);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(
            header.height + form.height + result.height + footer.height,
            area.height
        );
    }

    #[test]
    fn render_full_view() {
        use ratatui::backend::TestBackend;

        let mut app = make_app();
        fill_row(&mut app, &["Math", "A", "3"]);
        app.handle_key_action(KeyAction::Calculate);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let completed = terminal.draw(|frame| app.render(frame)).unwrap();
        let screen: String = (0..completed.area.height)
            .flat_map(|y| (0..completed.area.width).map(move |x| (x, y)))
            .map(|pos| completed.buffer[pos].symbol().to_string())
            .collect();
        assert!(screen.contains("Math"));
        assert!(screen.contains("Your GPA is: 4.00"));
    }
}
