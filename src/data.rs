// src/data.rs
//
// Filter/presentation layer over a finished NormalizedTable.
//
// - FilteredView: positions of the records that pass the active filters.
//                 Borrows the table; never copies or mutates records.
// - Aggregates:   counts and averages over a view, recomputed on demand.
// - CoverageLevel: display bucket for a coverage score.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::consts::{ALL_OPTION, MODERATE_THRESHOLD, RICH_THRESHOLD};
use crate::config::state::FilterState;
use crate::ingest::names::is_us_state;
use crate::model::{JurisdictionRecord, NormalizedTable, Topic};

/* ---------------- Data-type filter ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataTypeFilter {
    #[default]
    All,
    VulnerableProtections,
    EquityInitiatives,
    CivilRights,
    LanguageAccess,
    DisabilityProvisions,
    EmergencyPowers,
}

impl DataTypeFilter {
    pub const ALL: [DataTypeFilter; 7] = [
        DataTypeFilter::All,
        DataTypeFilter::VulnerableProtections,
        DataTypeFilter::EquityInitiatives,
        DataTypeFilter::CivilRights,
        DataTypeFilter::LanguageAccess,
        DataTypeFilter::DisabilityProvisions,
        DataTypeFilter::EmergencyPowers,
    ];

    /// The six categories shown in the summary counters.
    pub const CATEGORIES: [DataTypeFilter; 6] = [
        DataTypeFilter::VulnerableProtections,
        DataTypeFilter::EquityInitiatives,
        DataTypeFilter::CivilRights,
        DataTypeFilter::LanguageAccess,
        DataTypeFilter::DisabilityProvisions,
        DataTypeFilter::EmergencyPowers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DataTypeFilter::All => ALL_OPTION,
            DataTypeFilter::VulnerableProtections => "Vulnerable Protections",
            DataTypeFilter::EquityInitiatives => "Equity Initiatives",
            DataTypeFilter::CivilRights => "Civil Rights",
            DataTypeFilter::LanguageAccess => "Language Access",
            DataTypeFilter::DisabilityProvisions => "Disability Provisions",
            DataTypeFilter::EmergencyPowers => "Emergency Powers",
        }
    }

    /// Topic field the filter tests; `None` for `All`.
    pub fn topic(self) -> Option<Topic> {
        match self {
            DataTypeFilter::All => None,
            DataTypeFilter::VulnerableProtections => Some(Topic::VulnerableProtections),
            DataTypeFilter::EquityInitiatives => Some(Topic::EquityInitiatives),
            DataTypeFilter::CivilRights => Some(Topic::CivilRights),
            DataTypeFilter::LanguageAccess => Some(Topic::LanguageAccess),
            DataTypeFilter::DisabilityProvisions => Some(Topic::DisabilityNeeds),
            DataTypeFilter::EmergencyPowers => Some(Topic::EmergencyDeclaration),
        }
    }

    /// Case-insensitive match on label or on a compact spelling
    /// (`civil-rights`, `civil_rights`, `civilrights`).
    pub fn parse(text: &str) -> Option<Self> {
        let norm = |s: &str| -> String {
            s.chars().filter(|c| c.is_ascii_alphanumeric()).map(|c| c.to_ascii_lowercase()).collect()
        };
        let want = norm(text);
        Self::ALL.into_iter().find(|f| norm(f.label()) == want)
    }

    pub fn matches(self, rec: &JurisdictionRecord) -> bool {
        self.topic().is_none_or(|t| rec.has(t))
    }
}

impl fmt::Display for DataTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* ---------------- Filtered view ---------------- */

/// Zero-copy filtered view for display.
/// Holds positions of kept records in table order.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    table: &'a NormalizedTable,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn table(&self) -> &'a NormalizedTable { self.table }

    pub fn get(&self, i: usize) -> Option<&'a JurisdictionRecord> {
        self.row_ix.get(i).and_then(|&ix| self.table.records().get(ix))
    }

    pub fn records(&self) -> impl Iterator<Item = &'a JurisdictionRecord> + '_ {
        let records = self.table.records();
        self.row_ix.iter().map(move |&ix| &records[ix])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.position(name).is_some_and(|ix| self.row_ix.contains(&ix))
    }
}

/// Data-type AND region filter over `table`. The table is never touched.
pub fn apply_filters<'a>(table: &'a NormalizedTable, state: &FilterState) -> FilteredView<'a> {
    let region_all = state.region_is_all();
    let row_ix = table
        .iter()
        .enumerate()
        .filter(|(_, r)| state.data_type.matches(r))
        .filter(|(_, r)| region_all || r.region.name() == state.region)
        .map(|(ix, _)| ix)
        .collect();
    FilteredView { row_ix, table }
}

/* ---------------- Aggregates ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct Aggregates {
    /// Records in the view.
    pub jurisdictions: usize,
    /// Records in the view that are one of the fifty states.
    pub states: usize,
    /// 0.0 for an empty view.
    pub mean_coverage: f64,
    topic_counts: [usize; Topic::COUNT],
}

impl Aggregates {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        let mut states = 0;
        let mut sum = 0.0;
        let mut topic_counts = [0usize; Topic::COUNT];

        for rec in view.records() {
            if is_us_state(&rec.name) { states += 1; }
            sum += rec.coverage_score();
            for t in Topic::ALL {
                if rec.has(t) { topic_counts[t.index()] += 1; }
            }
        }

        let n = view.len();
        Self {
            jurisdictions: n,
            states,
            mean_coverage: if n == 0 { 0.0 } else { sum / n as f64 },
            topic_counts,
        }
    }

    pub fn topic_count(&self, topic: Topic) -> usize { self.topic_counts[topic.index()] }

    /// Count for a summary category; `All` gives the view size.
    pub fn category_count(&self, f: DataTypeFilter) -> usize {
        f.topic().map_or(self.jurisdictions, |t| self.topic_count(t))
    }
}

/* ---------------- Coverage level ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageLevel {
    Rich,
    Moderate,
    Limited,
}

impl CoverageLevel {
    pub fn of(score: f64) -> Self {
        if score >= RICH_THRESHOLD {
            CoverageLevel::Rich
        } else if score >= MODERATE_THRESHOLD {
            CoverageLevel::Moderate
        } else {
            CoverageLevel::Limited
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CoverageLevel::Rich => "Rich Data",
            CoverageLevel::Moderate => "Moderate Data",
            CoverageLevel::Limited => "Limited Data",
        }
    }
}

impl fmt::Display for CoverageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* ---------------- Region options ---------------- */

/// `"All"` followed by the distinct region names in `table`, sorted.
pub fn region_options(table: &NormalizedTable) -> Vec<String> {
    let distinct: BTreeSet<&str> = table.iter().map(|r| r.region.name()).collect();
    std::iter::once(ALL_OPTION)
        .chain(distinct)
        .map(|s| s!(s))
        .collect()
}
