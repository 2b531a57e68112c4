//! Windows implementations of platform helpers (best-effort, no ACL management).
//!
//! Windows lacks POSIX mode semantics; entries inherit the parent's ACL.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Exclusive directory creation; `AlreadyExists` if the path is taken.
pub fn create_dir_private(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}

/// Exclusive read/write file creation (CREATE_NEW).
pub fn create_file_private(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(path)
}

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}
