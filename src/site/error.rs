//! Build error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of a generation run.
///
/// Any of these aborts the whole run; there is no partially valid output.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Input directory or a source page cannot be read.
    #[error("cannot read input `{}`", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two source files derive the same page name.
    #[error(
        "duplicate page name `{name}`: `{}` and `{}`",
        first.display(),
        second.display()
    )]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Output directory or a rendered page cannot be written.
    #[error("cannot write output `{}`", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputAccess {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
