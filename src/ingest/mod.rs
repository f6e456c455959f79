// src/ingest/mod.rs
pub mod cache;
pub mod engine;
pub mod names;
pub mod rules;
pub mod sheet;
pub mod source;

pub use cache::IngestCache;
pub use engine::{ingest, FileSummary, IngestReport, SkipReason, SkippedFile};
pub use names::NameMap;
pub use source::{FileSet, Fingerprint, SourceFile};
