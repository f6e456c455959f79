// src/ingest/cache.rs
//! Memoized ingestion keyed by the input fingerprint.
//!
//! A finished report is shared as `Arc<IngestReport>`; a re-ingest builds a
//! new report and swaps the pointer, so readers holding the old `Arc` keep a
//! consistent table until they drop it.

use std::sync::Arc;

use crate::progress::Progress;

use super::engine::{ingest, IngestReport};
use super::names::NameMap;
use super::source::{FileSet, Fingerprint};

#[derive(Debug, Default)]
pub struct IngestCache {
    key: Option<Fingerprint>,
    report: Arc<IngestReport>,
    hits: usize,
    misses: usize,
}

impl IngestCache {
    pub fn new() -> Self { Self::default() }

    /// Return the cached report when `files` + `names` are unchanged since the
    /// last call, otherwise ingest again and replace the cached report.
    pub fn get_or_ingest(
        &mut self,
        files: &FileSet,
        names: &NameMap,
        progress: Option<&mut dyn Progress>,
    ) -> Arc<IngestReport> {
        let fp = files.fingerprint(names);

        if self.key == Some(fp) {
            self.hits += 1;
            logd!("Cache: Hit {}", fp.short());
            return Arc::clone(&self.report);
        }

        self.misses += 1;
        logf!("Cache: Miss {} → ingesting {} file(s)", fp.short(), files.len());
        let report = Arc::new(ingest(files, names, progress));
        self.report = Arc::clone(&report);
        self.key = Some(fp);
        report
    }

    /// Drop the key so the next call re-ingests.
    pub fn invalidate(&mut self) {
        if self.key.take().is_some() {
            logd!("Cache: Invalidated");
        }
    }

    /// Last report (empty before the first ingest).
    pub fn current(&self) -> Arc<IngestReport> { Arc::clone(&self.report) }

    pub fn fingerprint(&self) -> Option<Fingerprint> { self.key }

    /// (hits, misses) since construction.
    pub fn stats(&self) -> (usize, usize) { (self.hits, self.misses) }
}
