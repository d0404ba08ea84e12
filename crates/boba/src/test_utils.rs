use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Mutex, OnceLock};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filesystem::Fs;

pub fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct EnvVarGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: String) -> Self {
        let original = env::var(key).ok();
        env::set_var(key, value);
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(value) = &self.original {
            env::set_var(self.key, value);
        } else {
            env::remove_var(self.key);
        }
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Key events for typing `text` one character at a time.
pub fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
}

#[derive(Debug, Default)]
struct MemFsState {
    dirs: HashMap<PathBuf, Vec<(String, bool)>>,
    files: HashMap<PathBuf, String>,
    writes: Vec<(PathBuf, String)>,
    fail_writes: bool,
}

/// In-memory [`Fs`] that records every write. Clones share state, so a test
/// can keep a handle after boxing one into the app.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    state: Rc<RefCell<MemFsState>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: &str, entries: &[(&str, bool)]) -> Self {
        let entries = entries
            .iter()
            .map(|(name, is_dir)| (name.to_string(), *is_dir))
            .collect();
        self.state
            .borrow_mut()
            .dirs
            .insert(PathBuf::from(path), entries);
        self
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.state
            .borrow_mut()
            .files
            .insert(PathBuf::from(path), contents.to_string());
        self
    }

    pub fn failing_writes(self) -> Self {
        self.state.borrow_mut().fail_writes = true;
        self
    }

    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.state.borrow().writes.clone()
    }
}

impl Fs for MemFs {
    fn list_dir(&self, path: &Path) -> Vec<(String, bool)> {
        self.state
            .borrow()
            .dirs
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.state
            .borrow()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        state.writes.push((path.to_path_buf(), contents.to_string()));
        state.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
