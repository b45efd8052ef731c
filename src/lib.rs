//! # debinfo
//!
//! Read control metadata out of Debian binary packages.
//!
//! Extraction walks the package's `ar` archive to `control.tar.xz`,
//! decompresses it, walks the inner tar archive to `./control` and returns
//! that file's bytes. Parsing turns those bytes into a [`ControlInfo`]
//! holding the single-line fields dpkg writes.
//!
//! ## Example
//!
//! ```no_run
//! use debinfo::{extract_control_bytes, parse_control_info};
//!
//! fn main() -> Result<(), debinfo::Error> {
//!     let content = extract_control_bytes("foo_1.2.3_amd64.deb")?;
//!     let info = parse_control_info(&String::from_utf8_lossy(&content));
//!     println!("{} {}", info.package, info.version);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod deb;
pub mod error;

pub use cli::Cli;
pub use deb::{
    CONTROL_ARCHIVE_NAME, CONTROL_FILE_PATH, ControlInfo, extract_control_bytes,
    extract_control_bytes_from, parse_control_info, read_control_info,
};
pub use error::{Container, Error, Result};
