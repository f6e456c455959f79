// benches/ingest.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use disaster_dash::config::state::FilterState;
use disaster_dash::data::{apply_filters, Aggregates, DataTypeFilter};
use disaster_dash::ingest::{ingest, names::POSTAL_CODES, FileSet, NameMap, SourceFile};

const HEADERS: &str = "State,Key Statutes,Local Authority,Notable Provisions,\
Vulnerable Population Protections,Civil Rights,Disability Access,Language Access,\
Equity Initiatives,Emergency Declaration,Mitigation Planning,Mutual Aid";

/// Seven regional files, every jurisdiction in each, every fourth cell empty.
fn synthetic_files() -> FileSet {
    let prefixes = ["CA-WA-OR", "SW-", "Midwest", "Northeast", "Appalachia", "MTN", "AK-HI"];
    let files = prefixes
        .iter()
        .enumerate()
        .map(|(fi, p)| {
            let mut text = format!("{HEADERS}\n");
            for (ri, (name, _)) in POSTAL_CODES.iter().enumerate() {
                text.push_str(name);
                for ci in 0..11 {
                    text.push(',');
                    if (ri + ci + fi) % 4 != 0 {
                        text.push_str("Provision text for this cell");
                    }
                }
                text.push('\n');
            }
            SourceFile::new(format!("{p}-laws.csv"), text.into_bytes())
        })
        .collect();
    FileSet::from_files(files)
}

fn bench_ingest(c: &mut Criterion) {
    let files = synthetic_files();
    let names = NameMap::default();

    c.bench_function("ingest_seven_files", |b| {
        b.iter(|| {
            let report = ingest(black_box(&files), &names, None);
            black_box(report.table.len())
        })
    });

    c.bench_function("fingerprint", |b| {
        b.iter(|| black_box(files.fingerprint(&names)))
    });

    let table = ingest(&files, &names, None).table;
    let mut st = FilterState::default();
    st.set_data_type(DataTypeFilter::CivilRights);
    st.set_region("Midwest");

    c.bench_function("filter_and_aggregate", |b| {
        b.iter(|| {
            let view = apply_filters(black_box(&table), &st);
            black_box(Aggregates::compute(&view).mean_coverage)
        })
    });
}

criterion_group!(benches, bench_ingest);
criterion_main!(benches);
