//! Directory browser pane.
//!
//! Lists one directory at a time. A synthetic `..` entry sits at the top of
//! every listing except the filesystem root. The listing is reloaded from
//! scratch whenever the path changes.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::filesystem::Fs;
use crate::theme::Theme;

use super::{is_plain, Effect};

const SELECTED_MARKER: &str = "➜";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirEntry {
    Parent,
    Real { name: String, is_dir: bool },
}

impl DirEntry {
    pub fn name(&self) -> &str {
        match self {
            DirEntry::Parent => "..",
            DirEntry::Real { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        match self {
            DirEntry::Parent => true,
            DirEntry::Real { is_dir, .. } => *is_dir,
        }
    }
}

/// Parent of `path`, or `path` itself when it has none. A bare relative
/// name resolves to `.`.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}

fn is_root(path: &Path) -> bool {
    parent_dir(path) == path
}

#[derive(Debug)]
pub struct FileTree {
    path: PathBuf,
    entries: Vec<DirEntry>,
    cursor: usize,
    width: u16,
    height: u16,
    theme: Theme,
}

impl FileTree {
    pub fn new(start: PathBuf, fs: &dyn Fs, theme: Theme) -> Self {
        let mut tree = Self {
            path: start,
            entries: Vec::new(),
            cursor: 0,
            width: 0,
            height: 0,
            theme,
        };
        tree.reload(fs);
        tree
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<&DirEntry> {
        self.entries.get(self.cursor)
    }

    #[cfg(test)]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn handle_key(&mut self, key: KeyEvent, fs: &dyn Fs) -> Effect {
        if !is_plain(&key) {
            return Effect::None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => return self.activate(fs),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => self.collapse(fs),
            _ => {}
        }
        Effect::None
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Open the selected entry: navigate into directories (or up for `..`),
    /// or ask the root to open a regular file.
    pub fn activate(&mut self, fs: &dyn Fs) -> Effect {
        let Some(selected) = self.entries.get(self.cursor) else {
            return Effect::None;
        };
        match selected {
            DirEntry::Parent => {
                self.collapse(fs);
                Effect::None
            }
            DirEntry::Real { name, is_dir: true } => {
                let target = self.path.join(name);
                self.navigate(target, fs);
                Effect::None
            }
            DirEntry::Real { name, is_dir: false } => Effect::OpenFile(self.path.join(name)),
        }
    }

    /// Go to the parent directory regardless of the cursor. No-op at root.
    pub fn collapse(&mut self, fs: &dyn Fs) {
        let parent = parent_dir(&self.path);
        if parent != self.path {
            self.navigate(parent, fs);
        }
    }

    fn navigate(&mut self, path: PathBuf, fs: &dyn Fs) {
        log::debug!("tree: {} -> {}", self.path.display(), path.display());
        self.path = path;
        self.reload(fs);
    }

    fn reload(&mut self, fs: &dyn Fs) {
        let mut listed: Vec<DirEntry> = fs
            .list_dir(&self.path)
            .into_iter()
            .map(|(name, is_dir)| DirEntry::Real { name, is_dir })
            .collect();
        listed.sort_by(|a, b| a.name().cmp(b.name()));

        self.entries = Vec::with_capacity(listed.len() + 1);
        if !is_root(&self.path) {
            self.entries.push(DirEntry::Parent);
        }
        self.entries.extend(listed);
        self.cursor = 0;
    }

    /// Draw into `area`, clipped to the size last set by the root.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        let block = Block::default().padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(area);

        let mut lines = vec![
            Line::styled(format!("DIR: {}", self.path.display()), self.theme.dim()),
            Line::raw(""),
        ];
        let rows = (inner.height as usize).saturating_sub(lines.len()).max(1);
        let offset = (self.cursor + 1).saturating_sub(rows);
        for (index, entry) in self.entries.iter().enumerate().skip(offset).take(rows) {
            let mut label = entry.name().to_string();
            if entry.is_dir() {
                label.push('/');
            }
            let line = if index == self.cursor {
                Line::styled(format!("{SELECTED_MARKER} {label}"), self.theme.selected())
            } else {
                Line::styled(format!("  {label}"), self.theme.dim())
            };
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
