use std::mem;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, error};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::api::UserSource;
use crate::models::{Column, User};

use super::forms::FilterForm;
use super::helpers::{column_constraints, header_label, surface_error};
use super::screens::UsersScreen;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// Keyboard modes. In `Filtering`, printable keys go to the filter inputs
/// instead of acting as shortcuts.
enum Mode {
    Normal,
    Filtering,
}

/// Central application state for the users table.
pub struct App {
    /// Where users come from; refetched on reload.
    source: Box<dyn UserSource>,
    screen: UsersScreen,
    /// Per-column filter inputs. Their text is pushed into the screen's
    /// filters after every edit.
    form: FilterForm,
    mode: Mode,
    /// Optional status line surfaced in the footer.
    status: Option<StatusMessage>,
}

impl App {
    /// Construct an `App` with an empty table. Call [`App::reload`] to fill it.
    pub fn new(source: Box<dyn UserSource>) -> Self {
        Self {
            source,
            screen: UsersScreen::new(Vec::new()),
            form: FilterForm::default(),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Fetch users again and rebuild the view. Failures end up in the footer
    /// and leave the previous rows in place.
    pub fn reload(&mut self) {
        match self.source.fetch_users() {
            Ok(users) => {
                let count = users.len();
                self.screen.set_users(users);
                self.set_status(format!("Loaded {count} users."), StatusKind::Info);
            }
            Err(err) => {
                let status = err.status_code();
                let err = anyhow::Error::new(err).context("failed to fetch users");
                error!("{err:#}");
                let detail = match status {
                    Some(code) => format!("server answered HTTP {code}"),
                    None => surface_error(&err),
                };
                self.set_status(format!("Could not load users: {detail}"), StatusKind::Error);
            }
        }
    }

    /// Route a key press from the terminal. Control chords are shortcuts and
    /// never reach the filter inputs. Returns `true` when the user asked to
    /// exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_key(key.code);
        }

        match key.code {
            KeyCode::Char('c') => return Ok(true),
            KeyCode::Char('l') => self.handle_ctrl_l()?,
            KeyCode::Char('r') => self.handle_ctrl_r()?,
            _ => {}
        }
        Ok(false)
    }

    /// Top-level key dispatcher. Returns `true` when the user asked to exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Filtering => self.handle_filter_key(code)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.screen.move_selection(-1),
            KeyCode::Down => self.screen.move_selection(1),
            KeyCode::PageUp => self.screen.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.screen.move_selection(PAGE_STEP),
            KeyCode::Home => self.screen.select_first(),
            KeyCode::End => self.screen.select_last(),
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                return Ok(Mode::Filtering);
            }
            KeyCode::Char('0') => {
                self.screen.clear_sort();
                self.set_status("Showing users in fetched order.", StatusKind::Info);
            }
            KeyCode::Char(ch @ '1'..='9') => {
                let position = ch as usize - '1' as usize;
                if let Some(column) = Column::ALL.get(position).copied() {
                    self.screen.sort_by_column(column);
                    self.set_status(format!("Sorted by {column}."), StatusKind::Info);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reload(),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_filter_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Enter => return Ok(Mode::Normal),
            KeyCode::Tab | KeyCode::Right => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Left => self.form.previous_field(),
            KeyCode::Up => self.screen.move_selection(-1),
            KeyCode::Down => self.screen.move_selection(1),
            KeyCode::Backspace => {
                if self.form.backspace() {
                    self.apply_filters();
                }
            }
            KeyCode::Char(ch) => {
                if self.form.push_char(ch) {
                    self.apply_filters();
                }
            }
            _ => {}
        }
        Ok(Mode::Filtering)
    }

    /// Ctrl+L: empty every filter input.
    fn handle_ctrl_l(&mut self) -> Result<()> {
        if self.form.clear() {
            self.apply_filters();
            self.set_status("Filters cleared.", StatusKind::Info);
        }
        Ok(())
    }

    fn handle_ctrl_r(&mut self) -> Result<()> {
        self.reload();
        Ok(())
    }

    fn apply_filters(&mut self) {
        let filters = self.form.filters();
        debug!(
            "filters changed: {:?}",
            filters.iter().filter(|(_, f)| !f.is_empty()).collect::<Vec<_>>()
        );
        self.screen.set_filters(filters);
    }

    /// Main render routine. Splits the frame into the table and the footer.
    /// A terminal too short for both shows only the table.
    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.height <= FOOTER_HEIGHT {
            self.draw_table(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .split(area);
        self.draw_table(frame, chunks[0]);
        self.draw_footer(frame, chunks[1]);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let sorted = self.screen.sort_column();
        let editing = matches!(self.mode, Mode::Filtering);

        let header = Row::new(Column::ALL.map(|column| {
            let is_sorted = sorted == Some(column);
            let label_style = if is_sorted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(Text::from(vec![
                Line::from(Span::styled(header_label(column, is_sorted), label_style)),
                self.form.build_line(column, editing),
            ]))
        }))
        .height(2)
        .bottom_margin(1);

        let rows = self.screen.visible().iter().map(user_row);

        let title = format!(
            " Users {}/{} ",
            self.screen.visible().len(),
            self.screen.total()
        );

        let table = Table::new(rows, column_constraints())
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let selected = self.screen.current_user().map(|_| self.screen.selected());
        let mut state = TableState::default().with_selected(selected);
        frame.render_stateful_widget(table, area, &mut state);
    }

    /// Render the footer that hosts transient status messages and the current
    /// set of keyboard shortcuts.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.mode {
            Mode::Filtering => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Column   "),
                Span::styled("[Type]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[Ctrl+L]", key_style),
                Span::raw(" Clear   "),
                Span::styled("[Esc/Enter]", key_style),
                Span::raw(" Done"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[1-5]", key_style),
                Span::raw(" Sort   "),
                Span::styled("[0]", key_style),
                Span::raw(" Unsort   "),
                Span::styled("[/]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[R]", key_style),
                Span::raw(" Reload   "),
                Span::styled("[Q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    /// Set a status message that will appear in the footer on the next draw
    /// call.
    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

fn user_row(user: &User) -> Row<'static> {
    Row::new(Column::ALL.map(|column| Cell::from(user.value(column).to_text().into_owned())))
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}
