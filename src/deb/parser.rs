//! Parser for the `Key: Value` control file format.
//!
//! The parser is deliberately lenient: unknown keys, lines without a
//! `": "` separator and unparsable `Installed-Size` values are skipped
//! rather than reported. Control files routinely carry fields this crate
//! does not track.

use std::convert::Infallible;
use std::str::FromStr;

use super::structures::ControlInfo;

/// Parse the text of a control file into a [`ControlInfo`].
///
/// Lines are split on `'\n'` only, so a trailing `'\r'` stays part of the
/// value. When a key appears more than once the last occurrence wins.
///
/// # Examples
///
/// ```
/// use debinfo::parse_control_info;
///
/// let info = parse_control_info("Package: foo\nInstalled-Size: 4096\n");
/// assert_eq!(info.package, "foo");
/// assert_eq!(info.installed_size, 4096);
/// ```
pub fn parse_control_info(text: &str) -> ControlInfo {
    let mut info = ControlInfo::default();

    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };

        match key {
            "Installed-Size" => {
                if let Ok(size) = value.parse() {
                    info.installed_size = size;
                }
            }
            "Package" => info.package = value.to_string(),
            "Source" => info.source = value.to_string(),
            "Version" => info.version = value.to_string(),
            "Architecture" => info.architecture = value.to_string(),
            "Maintainer" => info.maintainer = value.to_string(),
            "Provides" => info.provides = value.to_string(),
            "Section" => info.section = value.to_string(),
            "Priority" => info.priority = value.to_string(),
            "Homepage" => info.homepage = value.to_string(),
            _ => {}
        }
    }

    info
}

impl FromStr for ControlInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_control_info(s))
    }
}
