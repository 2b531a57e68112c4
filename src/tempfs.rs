//! Filesystem capability used by the generator.
//!
//! The generator only ever needs two exclusive-create calls. Taking them as a
//! type parameter keeps the retry logic testable against a scripted filesystem.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::platform::{create_dir_private, create_file_private};

/// Exclusive-creation primitives.
///
/// Both calls must be atomic with respect to other creators and must fail with
/// `io::ErrorKind::AlreadyExists` when something is already at `path`. Any other
/// error is treated as terminal by the generator.
pub trait TempFs {
    /// Handle returned for a newly created file.
    type Handle;

    fn create_dir_exclusive(&self, path: &Path) -> io::Result<()>;

    fn create_file_exclusive(&self, path: &Path) -> io::Result<Self::Handle>;
}

/// The real filesystem: owner-only permissions, handles are `std::fs::File`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl TempFs for OsFs {
    type Handle = File;

    fn create_dir_exclusive(&self, path: &Path) -> io::Result<()> {
        create_dir_private(path)
    }

    fn create_file_exclusive(&self, path: &Path) -> io::Result<File> {
        create_file_private(path)
    }
}

impl<T: TempFs + ?Sized> TempFs for &T {
    type Handle = T::Handle;

    fn create_dir_exclusive(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_exclusive(path)
    }

    fn create_file_exclusive(&self, path: &Path) -> io::Result<Self::Handle> {
        (**self).create_file_exclusive(path)
    }
}
