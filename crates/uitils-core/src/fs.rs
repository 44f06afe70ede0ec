//! Filesystem access used by validation and generation

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// The filesystem operations a scaffolding run needs
pub trait Filesystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. Fails if it already exists.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `contents`
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Append `contents` to `path`, creating the file if needed
    fn append(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real, local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        // One write per call so concurrent appenders never split a line.
        file.write_all(contents.as_bytes())
    }
}
