// tests/cache.rs
use std::sync::Arc;

use disaster_dash::ingest::{FileSet, IngestCache, NameMap, SourceFile};
use disaster_dash::progress::Progress;

#[derive(Default)]
struct Counting { begun: usize, done: Vec<String>, finished: bool }

impl Progress for Counting {
    fn begin(&mut self, total: usize) { self.begun = total; }
    fn file_done(&mut self, name: &str) { self.done.push(name.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn files(ohio_text: &str) -> FileSet {
    FileSet::from_files(vec![
        SourceFile::new("Midwest.csv", format!("State,Equity\nOhio,{ohio_text}\n").into_bytes()),
        SourceFile::new("Northeast.csv", b"State,Equity\nMaine,M\n".to_vec()),
    ])
}

#[test]
fn hit_skips_ingest_and_miss_swaps_report() {
    let mut cache = IngestCache::new();
    let names = NameMap::default();

    let mut p = Counting::default();
    let first = cache.get_or_ingest(&files("A"), &names, Some(&mut p));
    assert_eq!(p.begun, 2);
    assert_eq!(p.done, vec!["Midwest.csv", "Northeast.csv"]);
    assert!(p.finished);

    let mut p2 = Counting::default();
    let again = cache.get_or_ingest(&files("A"), &names, Some(&mut p2));
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(p2.begun, 0, "cache hit must not re-ingest");

    let changed = cache.get_or_ingest(&files("B"), &names, None);
    assert!(!Arc::ptr_eq(&first, &changed));
    assert!(Arc::ptr_eq(&changed, &cache.current()));

    // readers holding the old report still see the old table
    let old = first.table.get("Ohio").unwrap();
    assert_eq!(old.topic(disaster_dash::model::Topic::EquityInitiatives), "A");
}

#[test]
fn remap_change_invalidates() {
    let mut cache = IngestCache::new();
    let a = cache.get_or_ingest(&files("A"), &NameMap::default(), None);
    let b = cache.get_or_ingest(&files("A"), &NameMap::with_overrides([("Maine", "Vermont")]), None);
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(b.table.get("Vermont").is_some());
}
