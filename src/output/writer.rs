//! Config file output.
//!
//! Files are opened with create + truncate and written in one go. There is
//! no temp-file rename, no backup of an existing file, and the parent
//! directory is never created.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{GenerateError, GenerateResult};

/// Write `contents` to `path`, replacing whatever was there.
pub fn write_config(path: &Path, contents: &str) -> GenerateResult<()> {
    let io_err = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("litecoin.conf");

        write_config(&path, "a much longer first version").unwrap();
        write_config(&path, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_missing_directory_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("litecoin.conf");

        let err = write_config(&path, "x").unwrap_err();
        match err {
            GenerateError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("missing").exists());
    }
}
