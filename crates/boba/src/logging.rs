//! File-backed logging.
//!
//! The terminal is in raw mode on the alternate screen while the app runs,
//! so log output goes to `<state dir>/boba/boba.log` instead of stderr.
//! The level comes from `BOBA_LOG` (env_logger filter syntax, default
//! `info`). If the log file cannot be opened, logging stays disabled.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_ENV: &str = "BOBA_LOG";

pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}

fn log_path() -> Option<PathBuf> {
    let root = dirs::state_dir().or_else(|| {
        dirs::home_dir().map(|home| home.join(".local").join("state"))
    })?;
    Some(root.join("boba").join("boba.log"))
}
