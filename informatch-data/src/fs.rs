//! Filesystem helpers built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Resolve an ambient directory for the given path and return the directory
/// with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a regular file.
///
/// A missing file reports `Ok(false)`; other I/O failures are returned.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = match open_dir_and_file(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path")
    }

    #[rstest]
    fn regular_files_are_detected() {
        let dir = TempDir::new().expect("tempdir");
        let path = utf8(&dir, "people.csv");
        std::fs::write(path.as_std_path(), "ID\n").expect("write file");
        assert!(file_is_file(&path).expect("inspect file"));
        assert!(open_utf8_file(&path).is_ok());
    }

    #[rstest]
    fn directories_and_missing_paths_are_not_files() {
        let dir = TempDir::new().expect("tempdir");
        let nested = utf8(&dir, "nested");
        std::fs::create_dir(nested.as_std_path()).expect("create dir");
        assert!(!file_is_file(&nested).expect("inspect dir"));
        assert!(!file_is_file(&utf8(&dir, "absent.csv")).expect("inspect missing"));
        assert!(!file_is_file(&nested.join("deeper/absent.csv")).expect("inspect missing dir"));
    }
}
