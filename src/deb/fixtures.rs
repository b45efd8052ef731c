//! In-memory builders for test packages.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use xz2::write::XzEncoder;

/// Build a tar archive with the member names written verbatim.
///
/// `tar::Builder::append_data` strips a leading `./`, so the name is copied
/// into the header by hand to match what dpkg-deb produces.
pub(crate) fn control_tar(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());

    for (name, data) in members {
        let mut header = tar::Header::new_gnu();
        let gnu = header.as_gnu_mut().unwrap();
        gnu.name[..name.len()].copy_from_slice(name.as_bytes());

        if name.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(0o755);
        } else {
            header.set_entry_type(tar::EntryType::Regular);
            header.set_mode(0o644);
        }
        header.set_size(data.len() as u64);
        header.set_cksum();

        builder.append(&header, *data).unwrap();
    }

    builder.into_inner().unwrap()
}

pub(crate) fn xz(data: &[u8]) -> Vec<u8> {
    let mut encoder = XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Build an `ar` archive from `(identifier, data)` pairs.
pub(crate) fn build_package(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut builder = ar::Builder::new(&mut out);
        for (name, data) in members {
            let header = ar::Header::new(name.as_bytes().to_vec(), data.len() as u64);
            builder.append(&header, *data).unwrap();
        }
    }
    out
}

/// A package laid out the way dpkg-deb writes one.
pub(crate) fn standard_package(control: &[u8]) -> Vec<u8> {
    let bundle = xz(&control_tar(&[
        ("./", b""),
        ("./conffiles", b"/etc/foo.conf\n"),
        ("./control", control),
        ("./md5sums", b"d41d8cd98f00b204e9800998ecf8427e  usr/bin/foo\n"),
    ]));
    let data = xz(&control_tar(&[("./", b""), ("./usr/bin/foo", b"#!/bin/sh\n")]));

    build_package(&[
        ("debian-binary", b"2.0\n"),
        ("control.tar.xz", &bundle),
        ("data.tar.xz", &data),
    ])
}

pub(crate) fn write_package(dir: &TempDir, package: &[u8]) -> PathBuf {
    let path = dir.path().join("foo_1.2.3_amd64.deb");
    std::fs::write(&path, package).unwrap();
    path
}
