// tests/ingest_e2e.rs
use std::fs;
use std::path::PathBuf;

use disaster_dash::ingest::{ingest, FileSet, NameMap, SkipReason, SourceFile};
use disaster_dash::model::{Region, Topic};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("disaster_dash_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn csv(name: &str, text: &str) -> SourceFile {
    SourceFile::new(name, text.as_bytes().to_vec())
}

#[test]
fn ohio_merges_across_two_regional_files() {
    let files = FileSet::from_files(vec![
        csv("Midwest-states.csv", "State,Mitigation Planning\nOhio,Plan A\n"),
        csv("Northeast-states.csv", "Jurisdiction,Equity Programs\nOhio,Program B\n"),
    ]);
    let report = ingest(&files, &NameMap::default(), None);

    assert!(report.errors.is_empty());
    assert_eq!(report.table.len(), 1);
    let ohio = report.table.get("Ohio").unwrap();
    assert_eq!(ohio.topic(Topic::MitigationPlanning), "Plan A");
    assert_eq!(ohio.topic(Topic::EquityInitiatives), "Program B");
    assert_eq!(ohio.region, Region::Northeast);
    assert_eq!(ohio.code, Some("OH"));
    assert!((ohio.coverage_score() - 2.0 / 11.0).abs() < 1e-12);
}

#[test]
fn later_empty_cell_keeps_earlier_value() {
    let files = FileSet::from_files(vec![
        csv("a.csv", "State,Vulnerable Population Protections\nOhio,X\n"),
        csv("b.csv", "State,Vulnerable Population Protections,Mutual Aid\nOhio,,EMAC\n"),
    ]);
    let report = ingest(&files, &NameMap::default(), None);
    let ohio = report.table.get("Ohio").unwrap();
    assert_eq!(ohio.topic(Topic::VulnerableProtections), "X");
    assert_eq!(ohio.filled_topics(), 2);
}

#[test]
fn header_leakage_row_creates_no_record() {
    let files = FileSet::from_files(vec![csv(
        "CA-WA-OR.csv",
        "State,Key Statutes\nAspect,Approach\nImpact Area,x\nCalifornia,Gov Code 8550\n",
    )]);
    let report = ingest(&files, &NameMap::default(), None);
    let names: Vec<&str> = report.table.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["California"]);
    assert_eq!(report.table.get("California").unwrap().region, Region::WestCoast);
}

#[test]
fn configurable_remap_changes_output() {
    let files = FileSet::from_files(vec![csv("x.csv", "State,Equity\nOthers,E\n")]);
    let default = ingest(&files, &NameMap::default(), None);
    assert!(default.table.get("Wisconsin").is_some());

    let custom = ingest(&files, &NameMap::with_overrides([("Others", "Minnesota")]), None);
    assert!(custom.table.get("Minnesota").is_some());
    assert!(custom.table.get("Wisconsin").is_none());
}

#[test]
fn scan_reads_directory_and_reports_bad_files() {
    let dir = tmp_dir("scan");
    fs::write(dir.join("Midwest-states.csv"), "State,Civil Rights\nOhio,Title VI\n").unwrap();
    fs::write(dir.join("AK-HI.tsv"), "Territory\tLanguage Access\nHawaii\tLEP plan\n").unwrap();
    fs::write(dir.join("broken.xlsx"), b"definitely not a workbook").unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();
    fs::write(dir.join("readme.csv"), "Topic,Notes\na,b\n").unwrap();

    let set = FileSet::scan(&dir).unwrap();
    let names: Vec<&str> = set.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["AK-HI.tsv", "Midwest-states.csv", "broken.xlsx", "readme.csv"]);

    let report = ingest(&set, &NameMap::default(), None);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path(), "broken.xlsx");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::NoJurisdictionColumn);

    assert_eq!(report.table.get("Hawaii").unwrap().region, Region::AlaskaHawaii);
    assert_eq!(report.table.get("Ohio").unwrap().region, Region::Midwest);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = std::env::temp_dir().join("disaster_dash_e2e_does_not_exist");
    let _ = fs::remove_dir_all(&dir);
    assert!(FileSet::scan(&dir).is_err());
}
