//! Application event types.
//!
//! The input thread turns terminal events into [`AppEvent`]s and sends them
//! over an mpsc channel; the main loop processes them one at a time.
//! `OpenFile` never comes from the terminal. It is produced when a pane
//! returns an open-file effect and is re-dispatched by the root controller.

use std::path::PathBuf;

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Input(KeyEvent),
    /// New window size as `(width, height)` in cells.
    Resize(u16, u16),
    OpenFile(PathBuf),
}
