// src/ingest/source.rs
//! The input file set.
//!
//! A `FileSet` holds the bytes of every input file, read once up front, so
//! ingestion is a pure function of the set. Its `Fingerprint` keys the cache.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::config::consts::INPUT_EXTENSIONS;
use crate::error::IngestError;

use super::names::NameMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Bare file name (no directories). Region rules match against it.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }
}

/// A listed file whose bytes could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unreadable {
    pub name: String,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl Unreadable {
    pub fn to_error(&self) -> IngestError {
        IngestError::FileRead {
            path: self.name.clone(),
            source: io::Error::new(self.kind, self.message.clone()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FileSet {
    files: Vec<SourceFile>,
    unreadable: Vec<Unreadable>,
}

impl FileSet {
    /// In-memory set, processed in the given order.
    pub fn from_files(files: Vec<SourceFile>) -> Self {
        Self { files, unreadable: Vec::new() }
    }

    /// Every accepted spreadsheet in `dir` (non-recursive), sorted by file name.
    /// Only a failure to list the directory is an error; unreadable files are
    /// kept aside and surface later as ingestion diagnostics.
    pub fn scan(dir: &Path) -> Result<Self, IngestError> {
        let entries = fs::read_dir(dir)
            .map_err(|source| IngestError::DataDir { dir: dir.to_path_buf(), source })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(e) => e.path(),
                Err(e) => {
                    loge!("Scan: Directory entry error in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if !path.is_file() { continue; }
            let accepted = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| INPUT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.') || n.starts_with("~$"));
            if accepted && !hidden {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = FileSet::default();
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match fs::read(&path) {
                Ok(bytes) => set.files.push(SourceFile { name, bytes }),
                Err(e) => {
                    loge!("Scan: Cannot read {}: {}", path.display(), e);
                    set.unreadable.push(Unreadable { name, kind: e.kind(), message: e.to_string() });
                }
            }
        }

        logf!(
            "Scan: {} → {} file(s), {} unreadable",
            dir.display(),
            set.files.len(),
            set.unreadable.len()
        );
        Ok(set)
    }

    pub fn files(&self) -> &[SourceFile] { &self.files }

    pub fn len(&self) -> usize { self.files.len() + self.unreadable.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Read failures recorded by `scan`.
    pub fn unreadable(&self) -> &[Unreadable] { &self.unreadable }

    /// Content fingerprint of the set plus the name map it will be read with.
    pub fn fingerprint(&self, names: &NameMap) -> Fingerprint {
        let mut h = Sha256::new();
        for f in &self.files {
            h.update((f.name.len() as u64).to_le_bytes());
            h.update(f.name.as_bytes());
            h.update((f.bytes.len() as u64).to_le_bytes());
            h.update(&f.bytes);
        }
        for e in &self.unreadable {
            h.update(b"!");
            h.update(e.name.as_bytes());
        }
        for (from, to) in names.iter() {
            h.update(b"=");
            h.update(from.as_bytes());
            h.update(b"\0");
            h.update(to.as_bytes());
        }
        Fingerprint(h.finalize().into())
    }
}

/// SHA-256 over the file set (names, contents, order) and the name map.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn short(&self) -> String {
        self.0[..6].iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short())
    }
}
