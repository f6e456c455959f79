// tests/workbook.rs
use disaster_dash::ingest::sheet::read_sheet;
use disaster_dash::ingest::{ingest, FileSet, NameMap, SourceFile};
use disaster_dash::model::{Region, Topic};
use rust_xlsxwriter::Workbook;

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// One-sheet .xlsx file; first row is the header.
fn xlsx(name: &str, rows: &[&[Cell]]) -> SourceFile {
    let mut wb = Workbook::new();
    {
        let ws = wb.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(t) => ws.write_string(r as u32, c as u16, *t).unwrap(),
                    Cell::Number(n) => ws.write_number(r as u32, c as u16, *n).unwrap(),
                };
            }
        }
    }
    SourceFile::new(name, wb.save_to_buffer().unwrap())
}

#[test]
fn ohio_merges_across_two_regional_workbooks() {
    use Cell::Text;
    let files = FileSet::from_files(vec![
        xlsx("Midwest-states.xlsx", &[
            &[Text("State"), Text("Mitigation Planning")],
            &[Text("Ohio"), Text("Plan A")],
        ]),
        xlsx("Northeast-states.xlsx", &[
            &[Text("Jurisdiction"), Text("Equity Programs")],
            &[Text("Ohio"), Text("Program B")],
        ]),
    ]);
    let report = ingest(&files, &NameMap::default(), None);

    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert_eq!(report.table.len(), 1);
    let ohio = report.table.get("Ohio").unwrap();
    assert_eq!(ohio.topic(Topic::MitigationPlanning), "Plan A");
    assert_eq!(ohio.topic(Topic::EquityInitiatives), "Program B");
    assert_eq!(ohio.region, Region::Northeast);
    assert_eq!(ohio.code, Some("OH"));
    assert!((ohio.coverage_score() - 2.0 / 11.0).abs() < 1e-12);
}

#[test]
fn workbook_cells_read_as_text() {
    use Cell::{Number, Text};
    let file = xlsx("CA-WA-OR.xlsx", &[
        &[Text("State"), Text("Key Statutes"), Text("Mutual Aid")],
        &[Text("California"), Number(8550.0), Number(1.5)],
        &[Text("Oregon"), Text("ORS 401")],
    ]);

    let sheet = read_sheet(&file).unwrap();
    assert_eq!(sheet.headers, vec!["State", "Key Statutes", "Mutual Aid"]);
    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.cell(0, 1), "8550");
    assert_eq!(sheet.cell(0, 2), "1.5");
    assert_eq!(sheet.cell(1, 1), "ORS 401");
    assert_eq!(sheet.cell(1, 2), "");

    let report = ingest(&FileSet::from_files(vec![file]), &NameMap::default(), None);
    let ca = report.table.get("California").unwrap();
    assert_eq!(ca.topic(Topic::KeyStatutes), "8550");
    assert_eq!(ca.region, Region::WestCoast);
    assert_eq!(report.table.get("Oregon").unwrap().filled_topics(), 1);
}
