use std::borrow::Cow;

/// Name of the compressed control bundle inside the package `ar` archive.
pub const CONTROL_ARCHIVE_NAME: &str = "control.tar.xz";

/// Path of the control file inside the control tar archive.
///
/// dpkg-deb writes its members relative to `./`, and the prefix is part of
/// the name that has to match.
pub const CONTROL_FILE_PATH: &str = "./control";

/// Parsed fields of a binary package control file.
///
/// Only single-line fields are tracked. `Description` and other
/// multi-line fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlInfo {
    pub package: String,
    pub source: String,
    pub version: String,
    pub architecture: String,
    pub maintainer: String,
    pub installed_size: i64,
    pub provides: String,
    pub section: String,
    pub priority: String,
    pub homepage: String,
}

impl ControlInfo {
    /// Tracked fields as `(key, value)` pairs, in the order dpkg writes them.
    ///
    /// Text fields are borrowed; only `Installed-Size` is formatted.
    pub fn fields(&self) -> [(&'static str, Cow<'_, str>); 10] {
        [
            ("Package", Cow::Borrowed(self.package.as_str())),
            ("Source", Cow::Borrowed(self.source.as_str())),
            ("Version", Cow::Borrowed(self.version.as_str())),
            ("Architecture", Cow::Borrowed(self.architecture.as_str())),
            ("Maintainer", Cow::Borrowed(self.maintainer.as_str())),
            ("Installed-Size", Cow::Owned(self.installed_size.to_string())),
            ("Provides", Cow::Borrowed(self.provides.as_str())),
            ("Section", Cow::Borrowed(self.section.as_str())),
            ("Priority", Cow::Borrowed(self.priority.as_str())),
            ("Homepage", Cow::Borrowed(self.homepage.as_str())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_order() {
        let info = ControlInfo {
            package: "foo".to_string(),
            installed_size: 12,
            ..Default::default()
        };

        let keys: Vec<_> = info.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys[0], "Package");
        assert_eq!(keys[5], "Installed-Size");
        assert_eq!(keys.len(), 10);

        let fields = info.fields();
        assert_eq!(fields[0].1, "foo");
        assert_eq!(fields[5].1, "12");
        assert_eq!(fields[1].1, "");
    }

    #[test]
    fn test_fields_borrow_text() {
        let info = ControlInfo {
            package: "foo".to_string(),
            homepage: "https://example.com".to_string(),
            ..Default::default()
        };

        let fields = info.fields();
        for (key, value) in &fields {
            if *key == "Installed-Size" {
                assert!(matches!(value, Cow::Owned(_)));
            } else {
                assert!(matches!(value, Cow::Borrowed(_)), "{key} was copied");
            }
        }
        assert!(std::ptr::eq(&*fields[0].1, info.package.as_str()));
    }
}
