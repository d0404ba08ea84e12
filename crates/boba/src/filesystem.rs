//! File system capability used by the panes.
//!
//! The panes never touch `std::fs` directly; they go through [`Fs`] so the
//! directory browser and editor can be driven against an in-memory fake.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// Directory listing, file reads and file writes.
pub trait Fs {
    /// List `(name, is_dir)` pairs for `path`. Read errors yield an empty list.
    fn list_dir(&self, path: &Path) -> Vec<(String, bool)>;

    /// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`Fs`] backed by the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFs;

impl Fs for OsFs {
    fn list_dir(&self, path: &Path) -> Vec<(String, bool)> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("list {} failed: {err}", path.display());
                return Vec::new();
            }
        };
        entries
            .filter_map(Result::ok)
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                let is_dir = entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false);
                (name, is_dir)
            })
            .collect()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::{Fs, OsFs};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn list_dir_reports_directories() {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir(dir.path().join("src")).expect("create src");
        fs::write(dir.path().join("notes.txt"), "hi").expect("write notes");

        let mut entries = OsFs.list_dir(dir.path());
        entries.sort();

        assert_eq!(
            entries,
            vec![("notes.txt".to_string(), false), ("src".to_string(), true)]
        );
    }

    #[test]
    fn list_dir_is_empty_for_missing_path() {
        let dir = TempDir::new().expect("temp dir");
        assert!(OsFs.list_dir(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn write_then_read_round_trips_verbatim() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("file.txt");
        OsFs.write(&path, "one\ntwo\n").expect("write");
        assert_eq!(OsFs.read_text(&path).expect("read"), "one\ntwo\n");
    }

    #[test]
    fn read_text_accepts_invalid_utf8() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("blob.bin");
        fs::write(&path, [b'o', b'k', 0xff, b'\n']).expect("write blob");

        assert_eq!(OsFs.read_text(&path).expect("read"), "ok\u{FFFD}\n");
    }

    #[test]
    fn read_text_fails_for_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        assert!(OsFs.read_text(&dir.path().join("missing")).is_err());
    }
}
