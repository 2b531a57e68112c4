//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the generator and logging code can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{create_dir_private, create_file_private, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{create_dir_private, create_file_private, open_log_file_secure_append};
