//! Unix implementations of platform helpers.
//! New entries are created owner-only through the create call itself, never by a later chmod.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// mkdir(path, 0700). Fails with `AlreadyExists` if anything is at `path`.
pub fn create_dir_private(path: &Path) -> io::Result<()> {
    DirBuilder::new().mode(0o700).create(path)
}

/// open(path, O_RDWR | O_CREAT | O_EXCL, 0600).
/// O_EXCL also refuses a dangling symlink at `path`.
pub fn create_file_private(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions to avoid
/// clobbering administrator adjustments (e.g. group-readable for log shipping).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        // umask may have narrowed it further; pin it to exactly 0600
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom, Write};
    use tempfile::tempdir;

    fn mode_of(p: &Path) -> u32 {
        fs::metadata(p).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn private_dir_is_0700() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("d");
        create_dir_private(&p).unwrap();
        assert_eq!(mode_of(&p), 0o700);
    }

    #[test]
    fn private_dir_refuses_existing() {
        let dir = tempdir().unwrap();
        let err = create_dir_private(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn private_file_is_0600_and_read_write() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("f");
        let mut f = create_file_private(&p).unwrap();
        assert_eq!(mode_of(&p), 0o600);
        f.write_all(b"test").unwrap();
        f.seek(SeekFrom::Start(0)).unwrap();
        let mut back = String::new();
        f.read_to_string(&mut back).unwrap();
        assert_eq!(back, "test");
    }

    #[test]
    fn private_file_refuses_existing_and_dangling_symlink() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("f");
        fs::write(&p, b"x").unwrap();
        assert_eq!(
            create_file_private(&p).unwrap_err().kind(),
            io::ErrorKind::AlreadyExists
        );

        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();
        assert_eq!(
            create_file_private(&link).unwrap_err().kind(),
            io::ErrorKind::AlreadyExists
        );
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn preserve_existing_log_file_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, b"hello").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        let _f = open_log_file_secure_append(&path).unwrap();
        assert_eq!(mode_of(&path), 0o640, "existing permissions should be preserved");
    }

    #[test]
    fn new_log_file_gets_0600() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new_log.txt");
        let _f = open_log_file_secure_append(&path).unwrap();
        assert_eq!(mode_of(&path), 0o600, "newly created log file should be 0600");
    }
}
