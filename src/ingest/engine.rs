// src/ingest/engine.rs
//! The ingestion fold: every file's rows → one record per jurisdiction.
//!
//! Per file:
//! 1. read the sheet (failure → `IngestError`, file skipped, run continues)
//! 2. find the jurisdiction column (none → soft skip)
//! 3. classify every header once via `rules::classify_column`
//! 4. per row: trim + remap the jurisdiction label, drop leakage labels,
//!    merge topic cells into the record, apply the file's region
//!
//! After all files, postal codes are attached from `names::postal_code`.

use crate::error::IngestError;
use crate::model::{NormalizedTable, Region, Topic};
use crate::progress::Progress;

use super::names::{postal_code, NameMap};
use super::rules::{classify_column, find_jurisdiction_column, is_non_jurisdiction, region_for_file};
use super::sheet::{read_sheet, Sheet};
use super::source::{FileSet, SourceFile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoJurisdictionColumn,
    NoUsableRows,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

/// What one file contributed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub region: Region,
    pub rows_kept: usize,
    pub rows_discarded: usize,
}

/// Result of one ingestion run. The table is complete even when `errors`
/// is non-empty; it just lacks the failed files' data.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub table: NormalizedTable,
    pub files: Vec<FileSummary>,
    pub skipped: Vec<SkippedFile>,
    pub errors: Vec<IngestError>,
}

impl IngestReport {
    pub fn has_errors(&self) -> bool { !self.errors.is_empty() }
}

pub fn ingest(
    set: &FileSet,
    names: &NameMap,
    mut progress: Option<&mut dyn Progress>,
) -> IngestReport {
    let mut report = IngestReport::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(set.len());
    }

    for bad in set.unreadable() {
        report.errors.push(bad.to_error());
        if let Some(p) = progress.as_deref_mut() {
            p.file_done(&bad.name);
        }
    }

    for file in set.files() {
        match read_sheet(file) {
            Ok(sheet) => fold_sheet(&mut report, file, &sheet, names),
            Err(e) => {
                loge!("Ingest: {}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Error: {e}"));
                }
                report.errors.push(e);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.file_done(&file.name);
        }
    }

    for rec in report.table.records_mut() {
        rec.code = postal_code(&rec.name);
        if rec.code.is_none() {
            logd!("Ingest: No postal code for '{}'", rec.name);
        }
    }

    logf!(
        "Ingest: Done jurisdictions={} files={} skipped={} errors={}",
        report.table.len(),
        report.files.len(),
        report.skipped.len(),
        report.errors.len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

fn fold_sheet(report: &mut IngestReport, file: &SourceFile, sheet: &Sheet, names: &NameMap) {
    let Some(jcol) = find_jurisdiction_column(&sheet.headers) else {
        logf!("Ingest: Skip {} (no jurisdiction column)", file.name);
        report.skipped.push(SkippedFile {
            name: file.name.clone(),
            reason: SkipReason::NoJurisdictionColumn,
        });
        return;
    };

    let topics: Vec<(usize, Topic)> = sheet
        .headers
        .iter()
        .enumerate()
        .filter_map(|(ci, h)| classify_column(h).map(|t| (ci, t)))
        .collect();
    let region = region_for_file(&file.name);

    let mut kept = 0usize;
    let mut discarded = 0usize;

    for ri in 0..sheet.row_count() {
        let label = sheet.cell(ri, jcol).trim();
        let name = names.canonical(label);
        if is_non_jurisdiction(name) {
            discarded += 1;
            continue;
        }

        let rec = report.table.entry(name);
        for &(ci, topic) in &topics {
            rec.merge_topic(topic, sheet.cell(ri, ci));
        }
        if region != Region::Unknown {
            rec.region = region;
        }
        kept += 1;
    }

    logf!(
        "Ingest: {} → kept={} discarded={} topics={} region={}",
        file.name, kept, discarded, topics.len(), region
    );

    if kept == 0 {
        report.skipped.push(SkippedFile {
            name: file.name.clone(),
            reason: SkipReason::NoUsableRows,
        });
        return;
    }

    report.files.push(FileSummary {
        name: file.name.clone(),
        region,
        rows_kept: kept,
        rows_discarded: discarded,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::source::SourceFile;

    fn csv(name: &str, text: &str) -> SourceFile {
        SourceFile::new(name, text.as_bytes().to_vec())
    }

    fn run(files: Vec<SourceFile>) -> IngestReport {
        ingest(&FileSet::from_files(files), &NameMap::default(), None)
    }

    #[test]
    fn leakage_rows_create_no_record() {
        let r = run(vec![csv(
            "Midwest.csv",
            "State,Key Statutes\nAspect,Approach\nOhio,ORC 5502\nnan,x\n,y\n",
        )]);
        let names: Vec<&str> = r.table.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["Ohio"]);
        assert_eq!(r.files[0].rows_kept, 1);
        assert_eq!(r.files[0].rows_discarded, 3);
    }

    #[test]
    fn remap_applies_before_merge() {
        let r = run(vec![csv(
            "x.csv",
            "Jurisdiction,Equity\n\" Iowa, etc. \",A\nIowa,\nOthers,B\n",
        )]);
        assert_eq!(r.table.len(), 2);
        assert_eq!(r.table.get("Iowa").map(|x| x.topic(Topic::EquityInitiatives)), Some("A"));
        assert_eq!(r.table.get("Wisconsin").map(|x| x.code), Some(Some("WI")));
    }

    #[test]
    fn file_without_jurisdiction_column_is_soft_skipped() {
        let r = run(vec![
            csv("notes.csv", "Topic,Equity\nx,y\n"),
            csv("Northeast.csv", "State,Equity\nMaine,z\n"),
        ]);
        assert!(r.errors.is_empty());
        assert_eq!(r.skipped, vec![SkippedFile { name: s!("notes.csv"), reason: SkipReason::NoJurisdictionColumn }]);
        assert_eq!(r.table.len(), 1);
    }

    #[test]
    fn bad_file_is_reported_and_run_continues() {
        let r = run(vec![
            csv("broken.xlsx", "garbage"),
            csv("Midwest.csv", "State,Mutual Aid\nOhio,EMAC\n"),
        ]);
        assert_eq!(r.errors.len(), 1);
        assert_eq!(r.errors[0].path(), "broken.xlsx");
        assert_eq!(r.table.get("Ohio").map(|x| x.region), Some(Region::Midwest));
    }

    #[test]
    fn zero_usable_rows_is_skipped() {
        let r = run(vec![csv("Midwest.csv", "State,Equity\nRegion,x\n")]);
        assert!(r.table.is_empty());
        assert_eq!(r.skipped[0].reason, SkipReason::NoUsableRows);
    }

    #[test]
    fn unknown_region_file_keeps_previous_region() {
        let r = run(vec![
            csv("Midwest.csv", "State,Equity\nOhio,a\n"),
            csv("misc.csv", "State,Mutual Aid\nOhio,b\n"),
        ]);
        let ohio = r.table.get("Ohio").unwrap();
        assert_eq!(ohio.region, Region::Midwest);
        assert_eq!(ohio.filled_topics(), 2);
    }

    #[test]
    fn unmapped_names_get_no_code() {
        let r = run(vec![csv("x.csv", "Territory,Equity\nGuam,a\nPuerto Rico,b\n")]);
        assert_eq!(r.table.get("Guam").unwrap().code, None);
        assert_eq!(r.table.get("Puerto Rico").unwrap().code, Some("PR"));
    }
}
