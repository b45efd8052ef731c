//! Forward-only cursors over the two nested containers of a `.deb` file.
//!
//! Neither `ar` nor tar carries an index, so both cursors walk members in
//! order and stop at the first one whose name matches. Names are compared
//! as raw bytes with no normalisation.

use std::io::Read;

use tracing::trace;

use crate::error::{Container, Error, Result};

/// The outer `ar` archive of a binary package.
pub struct PackageArchive<R: Read> {
    archive: ar::Archive<R>,
}

impl<R: Read> PackageArchive<R> {
    pub fn new(reader: R) -> Self {
        Self {
            archive: ar::Archive::new(reader),
        }
    }

    /// Find the first member called `name` and hand its data to `f`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] if the archive ends before a match,
    /// [`Error::ArchiveRead`] if a member header cannot be read, or whatever
    /// `f` returns.
    pub fn with_member<T, F>(&mut self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Read) -> Result<T>,
    {
        while let Some(entry) = self.archive.next_entry() {
            let mut entry = entry.map_err(|source| Error::ArchiveRead {
                container: Container::Package,
                source,
            })?;

            let identifier = entry.header().identifier();
            if identifier != name.as_bytes() {
                trace!(member = %String::from_utf8_lossy(identifier), "skipping package member");
                continue;
            }

            return f(&mut entry);
        }

        Err(Error::MemberNotFound {
            container: Container::Package,
            name: name.to_string(),
        })
    }
}

/// The tar archive found inside the decompressed control bundle.
pub struct ControlArchive<R: Read> {
    archive: tar::Archive<R>,
}

impl<R: Read> ControlArchive<R> {
    pub fn new(reader: R) -> Self {
        Self {
            archive: tar::Archive::new(reader),
        }
    }

    /// Find the first member whose stored path is exactly `name` and hand
    /// its data to `f`.
    ///
    /// # Errors
    ///
    /// Same contract as [`PackageArchive::with_member`], reported against
    /// [`Container::Control`].
    pub fn with_member<T, F>(&mut self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Read) -> Result<T>,
    {
        let read_error = |source| Error::ArchiveRead {
            container: Container::Control,
            source,
        };

        for entry in self.archive.entries().map_err(read_error)? {
            let mut entry = entry.map_err(read_error)?;

            if *entry.path_bytes() != *name.as_bytes() {
                trace!(member = %String::from_utf8_lossy(&entry.path_bytes()), "skipping control member");
                continue;
            }

            return f(&mut entry);
        }

        Err(Error::MemberNotFound {
            container: Container::Control,
            name: name.to_string(),
        })
    }
}
