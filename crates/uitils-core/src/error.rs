//! Error type shared by validation and generation

use crate::validate::PathOrigin;
use std::io;
use std::path::{Path, PathBuf};

/// Every way a scaffolding run can fail. All variants are terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The component name does not start with an uppercase letter.
    #[error("Name of {subject} component must be capitalized")]
    Naming { subject: &'static str },

    /// Two options from the same mutually exclusive group were both set.
    #[error("Cannot use both `{first}` and `{second}`")]
    Conflict {
        first: &'static str,
        second: &'static str,
    },

    /// A directory or path the command depends on does not exist.
    #[error("{}", missing_path_message(.what, .path, .origin, .flag))]
    MissingDirectory {
        what: &'static str,
        path: PathBuf,
        origin: PathOrigin,
        flag: &'static str,
    },

    /// A filesystem operation failed while writing an artifact.
    #[error("Something went wrong while creating the {artifact} `{}`: {source}", .path.display())]
    Write {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an I/O failure with the artifact that was being written
    pub fn write(artifact: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Write {
            artifact,
            path: path.to_path_buf(),
            source,
        }
    }
}

fn missing_path_message(what: &str, path: &Path, origin: &PathOrigin, flag: &str) -> String {
    let remedy = format!(
        "Please create the directory or specify a different path with the `--{}` flag.",
        flag
    );
    match origin {
        PathOrigin::Default => format!(
            "Using the default {} path `{}` but that path does not exist. {}",
            what,
            path.display(),
            remedy
        ),
        PathOrigin::Explicit => format!(
            "The path you specified `{}` does not exist. {}",
            path.display(),
            remedy
        ),
    }
}
