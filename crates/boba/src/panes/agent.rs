//! Agent pane: an append-only chat transcript above a one-line prompt.
//!
//! Replies come from a [`Responder`]. The only implementation echoes the
//! prompt back; nothing leaves the process.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tui_textarea::TextArea;

use crate::config::AiConfig;
use crate::theme::Theme;
use crate::ui::{inset_horizontal, wrap_preserve};

use super::{input_single_line, single_line_text};

const USER_LABEL: &str = "You";
const DEFAULT_AGENT_NAME: &str = "Agent";
const INPUT_PLACEHOLDER: &str = "Ask the AI agent...";
const WELCOME_LINES: [&str; 2] = [
    "Welcome to the AI Agent Tab!",
    "Ask me anything about your code.",
];
/// Prompt box height including its top border.
const INPUT_HEIGHT: u16 = 3;
/// Blank rows between transcript and prompt.
const INPUT_GAP: u16 = 2;

/// Produces the agent's reply to a prompt.
pub trait Responder {
    fn reply(&self, prompt: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EchoResponder;

impl Responder for EchoResponder {
    fn reply(&self, prompt: &str) -> String {
        format!("I received: {prompt}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    pub label: String,
    pub text: String,
}

pub struct AgentPane {
    name: String,
    model: String,
    transcript: Vec<TranscriptLine>,
    input: TextArea<'static>,
    responder: Box<dyn Responder>,
    /// Rows scrolled up from the bottom; 0 keeps the newest line visible.
    scroll_back: usize,
    width: u16,
    height: u16,
    theme: Theme,
}

impl AgentPane {
    pub fn new(ai: &AiConfig, theme: Theme) -> Self {
        Self::with_responder(ai, theme, Box::new(EchoResponder))
    }

    pub fn with_responder(ai: &AiConfig, theme: Theme, responder: Box<dyn Responder>) -> Self {
        let name = match ai.name.trim() {
            "" => DEFAULT_AGENT_NAME.to_string(),
            name => name.to_string(),
        };
        Self {
            name,
            model: ai.model.clone(),
            transcript: Vec::new(),
            input: new_input(&theme),
            responder,
            scroll_back: 0,
            width: 0,
            height: 0,
            theme,
        }
    }

    #[cfg(test)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn input_text(&self) -> String {
        single_line_text(&self.input)
    }

    #[cfg(test)]
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Rows available to the transcript at the current size.
    pub fn transcript_height(&self) -> u16 {
        self.height.saturating_sub(INPUT_HEIGHT + INPUT_GAP)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.input_text();
                self.submit(&text);
            }
            KeyCode::PageUp => {
                let visible = usize::from(self.transcript_height());
                let limit = self.transcript_rows(self.text_width()).saturating_sub(visible);
                self.scroll_back = (self.scroll_back + visible.max(1)).min(limit);
            }
            KeyCode::PageDown => {
                let page = usize::from(self.transcript_height().max(1));
                self.scroll_back = self.scroll_back.saturating_sub(page);
            }
            _ => {
                input_single_line(&mut self.input, key);
            }
        }
    }

    /// Append the prompt and the reply, clear the input and scroll to the
    /// bottom. Blank prompts are ignored. Returns whether anything was sent.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let reply = self.responder.reply(text);
        self.transcript.push(TranscriptLine {
            speaker: Speaker::User,
            label: USER_LABEL.to_string(),
            text: text.to_string(),
        });
        self.transcript.push(TranscriptLine {
            speaker: Speaker::Agent,
            label: self.name.clone(),
            text: reply,
        });
        self.input = new_input(&self.theme);
        self.scroll_back = 0;
        true
    }

    fn text_width(&self) -> usize {
        usize::from(self.width.saturating_sub(2).max(1))
    }

    fn transcript_rows(&self, width: usize) -> usize {
        self.wrapped_lines(width).len()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner = inset_horizontal(area, 1);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(INPUT_GAP),
                Constraint::Length(INPUT_HEIGHT),
            ])
            .split(inner);

        let transcript_area = chunks[0];
        let lines = self.wrapped_lines(usize::from(transcript_area.width));
        let visible = usize::from(transcript_area.height);
        let max_offset = lines.len().saturating_sub(visible);
        let offset = max_offset - self.scroll_back.min(max_offset);
        let transcript =
            Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
        frame.render_widget(transcript, transcript_area);

        let title = format!(" {} · {} ", self.name, self.model);
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.dim())
            .title(Span::styled(title, self.theme.dim()));
        let input_area = block.inner(chunks[2]);
        frame.render_widget(block, chunks[2]);
        frame.render_widget(&self.input, input_area);
    }

    /// Transcript (or the welcome text) hard-wrapped to `width` columns,
    /// one entry per drawn row.
    fn wrapped_lines(&self, width: usize) -> Vec<Line<'static>> {
        if self.transcript.is_empty() {
            let style = Style::default().fg(self.theme.accent);
            return WELCOME_LINES
                .iter()
                .flat_map(|line| wrap_preserve(line, width))
                .map(|row| Line::styled(row, style))
                .collect();
        }
        let user = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD);
        let agent = Style::default().fg(self.theme.success);
        let body = Style::default().fg(self.theme.text);

        let mut rows = Vec::new();
        for line in &self.transcript {
            let label_style = match line.speaker {
                Speaker::User => user,
                Speaker::Agent => agent,
            };
            let prefix = format!("{}: ", line.label);
            let prefix_len = prefix.chars().count();
            let mut text_lines = line.text.split('\n');
            let first = format!("{prefix}{}", text_lines.next().unwrap_or_default());

            // The label may itself wrap, so split each row where it ends.
            let mut consumed = 0;
            for row in wrap_preserve(&first, width) {
                let row_len = row.chars().count();
                let label_chars = prefix_len.saturating_sub(consumed).min(row_len);
                let split = row
                    .char_indices()
                    .nth(label_chars)
                    .map_or(row.len(), |(index, _)| index);
                let (label, text) = row.split_at(split);
                rows.push(Line::from(vec![
                    Span::styled(label.to_string(), label_style),
                    Span::styled(text.to_string(), body),
                ]));
                consumed += row_len;
            }
            for rest in text_lines {
                rows.extend(
                    wrap_preserve(rest, width)
                        .into_iter()
                        .map(|row| Line::styled(row, body)),
                );
            }
        }
        rows
    }
}

fn new_input(theme: &Theme) -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_placeholder_text(INPUT_PLACEHOLDER);
    input.set_placeholder_style(theme.dim());
    input.set_cursor_line_style(Style::default());
    input.set_style(Style::default().fg(theme.text));
    input
}
