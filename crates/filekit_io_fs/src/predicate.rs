//! Existence, type and identity queries over paths.
//!
//! None of these return errors: a failed status query is folded into the
//! boolean answer.

use std::fs;
use std::io;
use std::path::Path;

/// `false` only when the path is confirmed absent.
///
/// Any other status failure (permission denied, I/O error) reports `true`,
/// since absence could not be confirmed.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path.as_ref()) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// `true` when the path resolves to a regular file.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path.as_ref()).is_ok_and(|meta| meta.is_file())
}

/// `true` when the path resolves to a directory.
pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path.as_ref()).is_ok_and(|meta| meta.is_dir())
}

/// `true` when both paths resolve to the same file-system entry.
///
/// Identity is by device and inode on unix, so two hard links to one file are
/// the same file while two files with equal content are not. Returns `false`
/// if either path cannot be queried.
pub fn is_same_file<P, Q>(path_a: P, path_b: Q) -> bool
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let Ok(meta_a) = fs::metadata(path_a.as_ref()) else {
        return false;
    };
    let Ok(meta_b) = fs::metadata(path_b.as_ref()) else {
        return false;
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        (meta_a.dev(), meta_a.ino()) == (meta_b.dev(), meta_b.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (meta_a, meta_b);
        match (
            fs::canonicalize(path_a.as_ref()),
            fs::canonicalize(path_b.as_ref()),
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{dir_exists, exists, file_exists, is_same_file};

    #[test]
    fn exists_reports_files_and_dirs() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file = tmp.path().join("a.txt");
        fs::write(&path_file, "a").expect("write");

        assert!(exists(&path_file));
        assert!(exists(tmp.path()));
        assert!(!exists(tmp.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn exists_is_true_when_status_query_fails_other_than_not_found() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file = tmp.path().join("plain.txt");
        fs::write(&path_file, "x").expect("write");
        let path_through_file = path_file.join("child");

        let err = fs::metadata(&path_through_file).expect_err("stat through a file");
        assert_ne!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(exists(&path_through_file));
        assert!(!file_exists(&path_through_file));
        assert!(!dir_exists(&path_through_file));
    }

    #[cfg(unix)]
    #[test]
    fn exists_is_true_when_status_query_is_denied() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let path_locked = tmp.path().join("locked");
        fs::create_dir(&path_locked).expect("mkdir");
        let path_inner = path_locked.join("inner.txt");
        fs::write(&path_inner, "x").expect("write");
        let path_missing = path_locked.join("missing.txt");

        fs::set_permissions(&path_locked, fs::Permissions::from_mode(0o000)).expect("chmod");
        let b_denied = fs::metadata(&path_missing)
            .is_err_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied);

        // Root bypasses permission checks, so only assert when denial happened.
        if b_denied {
            assert!(exists(&path_missing));
            assert!(!file_exists(&path_inner));
        }

        fs::set_permissions(&path_locked, fs::Permissions::from_mode(0o755)).expect("chmod back");
        assert!(!exists(&path_missing));
        assert!(exists(&path_inner));
    }

    #[test]
    fn file_and_dir_exists_distinguish_kinds() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file = tmp.path().join("a.txt");
        fs::write(&path_file, "a").expect("write");

        assert!(file_exists(&path_file));
        assert!(!dir_exists(&path_file));
        assert!(dir_exists(tmp.path()));
        assert!(!file_exists(tmp.path()));
        assert!(!file_exists(tmp.path().join("missing")));
        assert!(!dir_exists(tmp.path().join("missing")));
    }

    #[test]
    fn is_same_file_uses_identity_not_content() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_a = tmp.path().join("a.txt");
        let path_b = tmp.path().join("b.txt");
        fs::write(&path_a, "same").expect("write a");
        fs::write(&path_b, "same").expect("write b");

        assert!(is_same_file(&path_a, &path_a));
        assert!(is_same_file(tmp.path(), tmp.path().join(".")));
        assert!(!is_same_file(&path_a, &path_b));
        assert!(!is_same_file(&path_a, tmp.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn is_same_file_follows_hard_links() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_a = tmp.path().join("a.txt");
        let path_link = tmp.path().join("link.txt");
        fs::write(&path_a, "a").expect("write");
        fs::hard_link(&path_a, &path_link).expect("hard link");

        assert!(is_same_file(&path_a, &path_link));
    }
}
