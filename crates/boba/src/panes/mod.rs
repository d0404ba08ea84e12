//! The three independently stateful panes.
//!
//! Each pane handles the keys routed to it and returns an [`Effect`] for
//! the root controller to carry out. Panes never reach into each other;
//! the directory browser's open-file request, for example, travels back
//! up as an effect and the root hands the contents to the editor.
//!
//! Submodules:
//! - tree: directory browser
//! - editor: modal (Normal/Insert/Command) text editor
//! - agent: echoing chat transcript

pub mod agent;
pub mod editor;
pub mod tree;

use std::path::PathBuf;

use crossterm::event::{KeyEvent, KeyModifiers};
use tui_textarea::{Input, Key, TextArea};

/// Follow-up action requested by a pane update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFile(PathBuf),
    Quit,
}

/// True when no Ctrl/Alt modifier is held. Shift is allowed so that `:`
/// works on layouts where it is a shifted key.
pub(crate) fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Feed a key to a single-line text area, dropping anything that would
/// split the line.
pub(crate) fn input_single_line(textarea: &mut TextArea<'_>, key: KeyEvent) -> bool {
    let input = Input::from(key);
    let newline = input.key == Key::Enter
        || (input.ctrl && input.key == Key::Char('m'))
        || matches!(input.key, Key::Char('\n' | '\r'));
    if newline {
        return false;
    }
    textarea.input(input)
}

/// Text of the first (only) line of a single-line text area.
pub(crate) fn single_line_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().first().cloned().unwrap_or_default()
}
