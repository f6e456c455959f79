// src/error.rs
//! Error taxonomy.
//!
//! Ingestion errors are per-file and non-fatal: the engine collects them in
//! `IngestReport::errors` and keeps going. Only `DataDir` stops a scan.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {path}: {reason}")]
    Workbook { path: String, reason: String },

    #[error("{path} has no worksheets")]
    EmptyWorkbook { path: String },

    #[error("unsupported file type: {path}")]
    Unsupported { path: String },

    #[error("cannot list data directory {}: {source}", dir.display())]
    DataDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IngestError {
    /// File the error refers to (directory for `DataDir`).
    pub fn path(&self) -> String {
        match self {
            IngestError::FileRead { path, .. }
            | IngestError::Workbook { path, .. }
            | IngestError::EmptyWorkbook { path }
            | IngestError::Unsupported { path } => path.clone(),
            IngestError::DataDir { dir, .. } => dir.display().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    NothingToExport,

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
