use derive_more::Display;
use std::io;
use std::path::PathBuf;

/// Errors reported by template and project operations
///
/// Blank or duplicate folder names are not errors: the add operations ignore
/// them and report `false` instead.
#[derive(Debug, Display)]
pub enum Error {
    /// A folder position is out of range
    #[display(fmt = "invalid folder index {} (there are {} folders)", index, len)]
    InvalidIndex { index: usize, len: usize },
    /// A directory could not be created
    ///
    /// `created` lists the folders made before the failure, which stay on disk.
    #[display(fmt = "failed to create directory {:?}: {}", path, source)]
    Io {
        path: PathBuf,
        source: io::Error,
        created: Vec<PathBuf>,
    },
    /// An existing project directory could not be removed
    #[display(fmt = "failed to remove directory {:?}: {}", path, source)]
    Remove { path: PathBuf, source: io::Error },
    /// Reading from or writing to the user failed
    #[display(fmt = "prompt failed: {}", _0)]
    Prompt(io::Error),
    /// A project needs a non-blank name
    #[display(fmt = "project name cannot be empty")]
    EmptyProjectName,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } | Error::Remove { source, .. } => Some(source),
            Error::Prompt(source) => Some(source),
            Error::InvalidIndex { .. } | Error::EmptyProjectName => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
