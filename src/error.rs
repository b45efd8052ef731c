//! Error types for package extraction.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two nested containers an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The outer `ar` archive that is the `.deb` file itself.
    Package,
    /// The inner tar archive unpacked from `control.tar.xz`.
    Control,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Package => f.write_str("package"),
            Container::Control => f.write_str("control"),
        }
    }
}

/// Errors that can occur while extracting control data from a package.
#[derive(Debug, Error)]
pub enum Error {
    /// The package file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walking the members of one of the containers failed.
    #[error("failed to read {container} archive: {source}")]
    ArchiveRead {
        container: Container,
        #[source]
        source: io::Error,
    },

    /// The container was exhausted without a member of the expected name.
    #[error("{name} is not found in {container} archive")]
    MemberNotFound { container: Container, name: String },

    /// The compressed control member is not a valid xz stream.
    #[error("failed to parse {name}: {source}")]
    Decompression {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The control file was found but its contents could not be read.
    #[error("failed to read {name} file from {archive}: {source}")]
    ContentRead {
        name: String,
        archive: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for package operations.
pub type Result<T> = std::result::Result<T, Error>;
