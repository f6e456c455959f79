// tests/export.rs
use std::fs;
use std::path::PathBuf;

use disaster_dash::config::options::{AppOptions, ExportFormat};
use disaster_dash::config::state::FilterState;
use disaster_dash::data::{apply_filters, DataTypeFilter};
use disaster_dash::error::ExportError;
use disaster_dash::file;
use disaster_dash::ingest::{ingest, FileSet, NameMap, SourceFile};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("disaster_dash_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> disaster_dash::ingest::IngestReport {
    let files = FileSet::from_files(vec![SourceFile::new(
        "Midwest.csv",
        b"State,Key Statutes,Equity\nOhio,\"ORC 5502, 5915\",E\nIowa,Ch. 29C,\n".to_vec(),
    )]);
    ingest(&files, &NameMap::default(), None)
}

#[test]
fn writes_filtered_tsv_with_headers() {
    let report = sample();
    let mut opts = AppOptions::default();
    let dir = tmp_dir("tsv");
    opts.export.set_path(dir.join("equity.csv").to_str().unwrap());
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = true;

    let mut st = FilterState::default();
    st.set_data_type(DataTypeFilter::EquityInitiatives);
    let view = apply_filters(&report.table, &st);

    let path = file::write_export_single(&opts.export, &view).unwrap();
    assert!(path.to_string_lossy().ends_with("equity.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("name\tcode\tregion\tcoverage_score\tkey_statutes"));
    assert!(lines[1].starts_with("Ohio\tOH\tMidwest\t0.1818\tORC 5502, 5915\t"));
}

#[test]
fn csv_quotes_commas_and_skips_headers() {
    let report = sample();
    let mut opts = AppOptions::default();
    opts.export.include_headers = false;
    let view = apply_filters(&report.table, &FilterState::default());

    let text = file::export_string(&opts.export, &view);
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("Ohio,OH,Midwest,0.1818,\"ORC 5502, 5915\","));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn empty_view_is_nothing_to_export() {
    let report = sample();
    let mut st = FilterState::default();
    st.set_region("Northeast");
    let view = apply_filters(&report.table, &st);
    let err = file::write_export_single(&AppOptions::default().export, &view).unwrap_err();
    assert!(matches!(err, ExportError::NothingToExport));
}
