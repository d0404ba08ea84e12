//! Modal editor pane.
//!
//! Three modes:
//! - Normal: `i` enters Insert, `:` opens the command line, arrows and
//!   `h`/`j`/`k`/`l` move the cursor. Nothing else edits the buffer.
//! - Insert: every key except Esc goes to the text buffer.
//! - Command: a one-line prompt. Enter evaluates it against the configured
//!   save and quit tokens, Esc abandons it.
//!
//! The status message is cleared whenever a mode is entered explicitly and
//! overwritten when a command completes.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tui_textarea::{CursorMove, TextArea};

use crate::config::CommandsConfig;
use crate::filesystem::Fs;
use crate::theme::Theme;
use crate::ui::inset_horizontal;

use super::{input_single_line, is_plain, single_line_text, Effect};

const COMMAND_PROMPT: &str = ":";
const BUFFER_PLACEHOLDER: &str = "Empty file...";
const STATUS_BAR_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Normal,
    Insert,
    Command,
}

impl EditorMode {
    pub fn label(self) -> &'static str {
        match self {
            EditorMode::Normal => "NORMAL",
            EditorMode::Insert => "INSERT",
            EditorMode::Command => "COMMAND",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

pub struct Editor {
    mode: EditorMode,
    buffer: TextArea<'static>,
    command_line: TextArea<'static>,
    filename: Option<PathBuf>,
    status: Option<Status>,
    commands: CommandsConfig,
    theme: Theme,
    width: u16,
    height: u16,
}

impl Editor {
    pub fn new(commands: CommandsConfig, theme: Theme) -> Self {
        let mut editor = Self {
            mode: EditorMode::Normal,
            buffer: new_buffer(Vec::new(), &theme),
            command_line: new_command_line(&theme),
            filename: None,
            status: None,
            commands,
            theme,
            width: 0,
            height: 0,
        };
        editor.sync_cursor_style();
        editor
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[cfg(test)]
    pub fn filename(&self) -> Option<&std::path::Path> {
        self.filename.as_deref()
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    #[cfg(test)]
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.as_ref().map(|status| status.kind)
    }

    /// Buffer content as written to disk.
    pub fn text(&self) -> String {
        self.buffer.lines().join("\n")
    }

    #[cfg(test)]
    pub fn command_input(&self) -> String {
        single_line_text(&self.command_line)
    }

    #[cfg(test)]
    pub fn cursor(&self) -> (usize, usize) {
        self.buffer.cursor()
    }

    /// Inner buffer size: the pane size minus the inset for its own borders.
    pub fn buffer_size(&self) -> (u16, u16) {
        (self.width.saturating_sub(2), self.height.saturating_sub(2))
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Replace the buffer with `content` and associate it with `path`.
    pub fn set_content(&mut self, content: &str, path: PathBuf) {
        let lines = content.split('\n').map(str::to_string).collect();
        self.buffer = new_buffer(lines, &self.theme);
        self.filename = Some(path);
        self.sync_cursor_style();
    }

    /// Show an error on the status line without changing mode.
    pub fn report_error(&mut self, message: String) {
        self.set_status(StatusKind::Error, message);
    }

    pub fn handle_key(&mut self, key: KeyEvent, fs: &dyn Fs) -> Effect {
        match self.mode {
            EditorMode::Normal => self.handle_normal_key(key),
            EditorMode::Insert => {
                if key.code == KeyCode::Esc {
                    self.enter_normal();
                } else {
                    self.buffer.input(key);
                }
            }
            EditorMode::Command => match key.code {
                KeyCode::Esc => {
                    self.command_line = new_command_line(&self.theme);
                    self.enter_normal();
                }
                KeyCode::Enter => return self.submit_command(fs),
                _ => {
                    input_single_line(&mut self.command_line, key);
                }
            },
        }
        Effect::None
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if !is_plain(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('i') => {
                self.mode = EditorMode::Insert;
                self.status = None;
                self.sync_cursor_style();
            }
            KeyCode::Char(':') => {
                self.mode = EditorMode::Command;
                self.command_line = new_command_line(&self.theme);
                self.status = None;
                self.sync_cursor_style();
            }
            KeyCode::Left | KeyCode::Char('h') => self.buffer.move_cursor(CursorMove::Back),
            KeyCode::Right | KeyCode::Char('l') => self.buffer.move_cursor(CursorMove::Forward),
            KeyCode::Up | KeyCode::Char('k') => self.buffer.move_cursor(CursorMove::Up),
            KeyCode::Down | KeyCode::Char('j') => self.buffer.move_cursor(CursorMove::Down),
            _ => {}
        }
    }

    fn enter_normal(&mut self) {
        self.mode = EditorMode::Normal;
        self.status = None;
        self.sync_cursor_style();
    }

    fn submit_command(&mut self, fs: &dyn Fs) -> Effect {
        let raw = single_line_text(&self.command_line);
        let token = raw.trim();
        let is_save = self.commands.is_save(token);
        if !is_save && self.commands.is_quit(token) {
            return Effect::Quit;
        }

        self.command_line = new_command_line(&self.theme);
        self.mode = EditorMode::Normal;
        self.sync_cursor_style();

        if is_save {
            self.save(fs);
        } else {
            self.set_status(StatusKind::Warning, format!("Unknown command: {raw}"));
        }
        Effect::None
    }

    fn save(&mut self, fs: &dyn Fs) {
        let Some(path) = self.filename.clone() else {
            self.set_status(StatusKind::Warning, "No filename set!".to_string());
            return;
        };
        match fs.write(&path, &self.text()) {
            Ok(()) => {
                log::info!("saved {}", path.display());
                self.set_status(StatusKind::Info, format!("Saved: {}", path.display()));
            }
            Err(err) => {
                log::warn!("save {} failed: {err}", path.display());
                self.set_status(StatusKind::Error, format!("Error saving: {err}"));
            }
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(Status { kind, text });
    }

    /// The buffer cursor is only drawn while the buffer has input focus.
    fn sync_cursor_style(&mut self) {
        let style = if self.mode == EditorMode::Insert {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.buffer.set_cursor_style(style);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner = inset_horizontal(area, 1);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
            .split(inner);

        let (buffer_width, buffer_height) = self.buffer_size();
        let buffer_area = Rect {
            width: chunks[0].width.min(buffer_width.max(1)),
            height: chunks[0].height.min(buffer_height.max(1)),
            ..chunks[0]
        };
        frame.render_widget(&self.buffer, buffer_area);
        self.render_status_bar(frame, chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.mode == EditorMode::Command {
            let bar_style = Style::default().fg(self.theme.text).bg(self.theme.dark);
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(COMMAND_PROMPT.len() as u16 + 1),
                    Constraint::Min(1),
                ])
                .split(area);
            let prompt = Paragraph::new(format!(" {COMMAND_PROMPT}")).style(bar_style);
            frame.render_widget(prompt, chunks[0]);
            frame.render_widget(&self.command_line, chunks[1]);
            return;
        }

        let background = if self.mode == EditorMode::Insert {
            self.theme.primary
        } else {
            self.theme.secondary
        };
        let bar_style = Style::default().fg(self.theme.text).bg(background);
        let filename = self
            .filename
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let mut spans = vec![Span::raw(format!(" {}  {filename}", self.mode.label()))];
        if let Some(status) = &self.status {
            let color = match status.kind {
                StatusKind::Info => self.theme.text,
                StatusKind::Warning => self.theme.warning,
                StatusKind::Error => self.theme.error,
            };
            spans.push(Span::styled(
                format!("  {}", status.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);
    }
}

fn new_buffer(lines: Vec<String>, theme: &Theme) -> TextArea<'static> {
    let mut buffer = if lines.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(lines)
    };
    buffer.set_placeholder_text(BUFFER_PLACEHOLDER);
    buffer.set_placeholder_style(theme.dim());
    buffer.set_line_number_style(theme.dim());
    buffer.set_cursor_line_style(Style::default());
    buffer.set_style(Style::default().fg(theme.text));
    buffer
}

fn new_command_line(theme: &Theme) -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(Style::default());
    input.set_style(Style::default().fg(theme.text).bg(theme.dark));
    input
}
