//! Actionable hints for user-facing error messages.
//!
//! Wraps a `TempNameError` into one line naming what went wrong plus, for OS
//! errors, what the user can do about it.

use std::io;

use crate::errors::TempNameError;

/// Hint for a raw OS error code, if we have one.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => {
            Some("permission denied; check ownership and write permissions of the parent directory.")
        }
        libc::ENOENT => Some("parent directory not found; create it or pick another location."),
        libc::ENOTDIR => Some("a path component is not a directory."),
        libc::ENOSPC => Some("insufficient space on device."),
        libc::EDQUOT => Some("disk quota exceeded."),
        libc::EROFS => Some("read-only filesystem; cannot create entries here."),
        libc::ELOOP => Some("too many symbolic link levels (ELOOP); possible symlink cycle."),
        libc::ENAMETOOLONG => Some("filename or path too long; shorten the template."),
        libc::EMFILE => Some("process file descriptor limit reached; close files or raise limits."),
        libc::ENFILE => Some("system-wide file table overflow; reduce open files."),
        _ => None,
    }
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    // Common Win32 errors
    match code {
        5 => Some("access denied; check permissions."),  // ERROR_ACCESS_DENIED
        2 | 3 => Some("parent directory not found."),     // FILE / PATH NOT FOUND
        112 => Some("insufficient disk space."),          // ERROR_DISK_FULL
        19 => Some("write protected / read-only media."), // ERROR_WRITE_PROTECT
        206 => Some("filename or path too long (MAX_PATH exceeded)."),
        4 => Some("too many open files; close handles or increase limit."),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions of the parent directory.")
        }
        io::ErrorKind::NotFound => Some("parent directory not found; create it or pick another location."),
        _ => None,
    }
}

/// Full message for `err`, with a hint and the OS code where applicable.
pub fn explain(err: &TempNameError) -> String {
    match err {
        TempNameError::InvalidTemplate { .. } => {
            format!("{err} — templates must end in XXXXXX, e.g. 'build.XXXXXX'.")
        }
        TempNameError::Exhausted { .. } => {
            format!("{err} — the directory is crowded with similar names; clean it up or use a longer prefix.")
        }
        TempNameError::CreationFailed { source, .. } => {
            let mut msg = err.to_string();
            let hint = match source.raw_os_error() {
                Some(code) => os_hint(code),
                None => kind_hint(source.kind()),
            };
            if let Some(h) = hint {
                msg.push_str(" — ");
                msg.push_str(h);
            }
            if let Some(code) = source.raw_os_error() {
                msg.push_str(&format!(" [os code: {code}]"));
            }
            msg
        }
    }
}
