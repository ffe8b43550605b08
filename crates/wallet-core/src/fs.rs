//! Filesystem helpers for wallet files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` through a sibling temp file.
///
/// The temp file is hard-linked into place so readers never observe a
/// partial wallet. Refuses to replace an existing file, including one
/// created while this write was in progress. The result is readable by
/// the owner only on Unix.
pub fn write_new_file(destination: &Path, contents: &[u8]) -> io::Result<()> {
    if destination.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", destination.display()),
        ));
    }
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_sibling(destination);
    fs::write(&temp_path, contents)?;
    if let Err(err) = restrict_permissions(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    let published = publish(&temp_path, destination);
    let _ = fs::remove_file(&temp_path);
    published
}

/// Link `temp_path` into place at `destination`.
///
/// Unlike `rename`, linking fails with `AlreadyExists` when `destination`
/// appeared after the existence check, so a concurrent writer is never
/// replaced.
fn publish(temp_path: &Path, destination: &Path) -> io::Result<()> {
    fs::hard_link(temp_path, destination)
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp-{}", std::process::id()));
    destination.with_file_name(name)
}

fn restrict_permissions(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("wallets").join("main.wallet");

        write_new_file(&dest, b"data").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"data");
        assert!(!temp_sibling(&dest).exists());
    }

    #[test]
    fn test_write_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("main.wallet");
        fs::write(&dest, b"original").unwrap();

        let err = write_new_file(&dest, b"replacement").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dest).unwrap(), b"original");
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("main.wallet");
        write_new_file(&dest, b"data").unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_publish_never_replaces_a_file_that_appeared() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("main.wallet");
        let temp = temp_sibling(&dest);
        fs::write(&temp, b"replacement").unwrap();
        fs::write(&dest, b"concurrent").unwrap();

        let err = publish(&temp, &dest).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dest).unwrap(), b"concurrent");
    }
}
