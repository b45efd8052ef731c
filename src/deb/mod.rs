//! Debian binary package reading.
//!
//! A `.deb` file is an `ar` archive. One of its members, `control.tar.xz`,
//! is an xz-compressed tar archive that holds the package's `./control`
//! file among other maintainer files.
//!
//! ## Architecture
//!
//! - [`archive`]: forward-only cursors over the `ar` and tar containers
//! - [`extractor`]: composes the cursors with the xz decoder to pull out the control file
//! - [`parser`]: turns the control file text into a [`ControlInfo`]
//! - [`structures`]: the parsed record and the fixed member names
//!
//! ## Limitations
//!
//! - Only `control.tar.xz` is recognised; `control.tar.gz`, `control.tar.zst`
//!   and uncompressed `control.tar` bundles are reported as missing
//! - Multi-line fields such as `Description` are not parsed
//! - Packages are only ever read, never written

pub mod archive;
mod extractor;
mod parser;
mod structures;

#[cfg(test)]
mod fixtures;

pub use extractor::{extract_control_bytes, extract_control_bytes_from, read_control_info};
pub use parser::parse_control_info;
pub use structures::*;
