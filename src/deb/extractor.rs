use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;
use xz2::read::XzDecoder;

use crate::error::{Error, Result};

use super::archive::{ControlArchive, PackageArchive};
use super::parser::parse_control_info;
use super::structures::{CONTROL_ARCHIVE_NAME, CONTROL_FILE_PATH, ControlInfo};

/// Read the raw `./control` file out of the package at `path`.
///
/// The file handle is closed before this returns, whatever the outcome.
pub fn extract_control_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "opened package");
    extract_control_bytes_from(file)
}

/// Read the raw `./control` file out of a package read from `reader`.
///
/// The reader is consumed strictly front to back: package members up to
/// `control.tar.xz`, then the decompressed control archive up to
/// `./control`. Anything after the match is never read.
pub fn extract_control_bytes_from<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut package = PackageArchive::new(reader);

    package.with_member(CONTROL_ARCHIVE_NAME, |member| {
        debug!(member = CONTROL_ARCHIVE_NAME, "found control bundle");

        // Pull the first buffer through the decoder so a bad stream header
        // surfaces here and not as a tar read error.
        let mut decoder = BufReader::new(XzDecoder::new_multi_decoder(member));
        decoder.fill_buf().map_err(|source| Error::Decompression {
            name: CONTROL_ARCHIVE_NAME.to_string(),
            source,
        })?;

        let mut control = ControlArchive::new(decoder);
        control.with_member(CONTROL_FILE_PATH, |file| {
            let mut content = Vec::new();
            file.read_to_end(&mut content)
                .map_err(|source| Error::ContentRead {
                    name: CONTROL_FILE_PATH.to_string(),
                    archive: CONTROL_ARCHIVE_NAME.to_string(),
                    source,
                })?;

            debug!(bytes = content.len(), "read control file");
            Ok(content)
        })
    })
}

/// Extract and parse the control file of the package at `path`.
///
/// Invalid UTF-8 in the control file is replaced rather than rejected.
pub fn read_control_info(path: impl AsRef<Path>) -> Result<ControlInfo> {
    let content = extract_control_bytes(path)?;
    Ok(parse_control_info(&String::from_utf8_lossy(&content)))
}
