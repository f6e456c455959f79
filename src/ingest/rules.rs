// src/ingest/rules.rs
//! Header and file-name heuristics.
//!
//! Every rule here is a fixed, ordered table evaluated top to bottom, first
//! match wins. The tables are the single source of truth; the engine only
//! walks them.
//!
//! - `COLUMN_RULES`: header text → topic field.
//! - `REGION_RULES`: source file name → region.
//! - `JURISDICTION_HEADER_KEYS`: which column names the jurisdiction.
//! - `HEADER_LEAKAGE`: cell values that are really a mis-parsed second header row.

use crate::model::{Region, Topic};

/// A column rule matches when the lowercased header contains
/// any of `any` (if non-empty) and all of `all`.
pub struct ColumnRule {
    pub any: &'static [&'static str],
    pub all: &'static [&'static str],
    pub topic: Topic,
}

impl ColumnRule {
    fn matches(&self, header_lc: &str) -> bool {
        let any_ok = self.any.is_empty() || self.any.iter().any(|k| header_lc.contains(k));
        let all_ok = self.all.iter().all(|k| header_lc.contains(k));
        any_ok && all_ok
    }
}

pub static COLUMN_RULES: &[ColumnRule] = &[
    ColumnRule { any: &["statute", "code"],                all: &[], topic: Topic::KeyStatutes },
    ColumnRule { any: &["local authority"],                all: &[], topic: Topic::LocalAuthority },
    ColumnRule { any: &["notable provision"],              all: &[], topic: Topic::NotableProvisions },
    ColumnRule { any: &[],                                 all: &["vulnerable", "protection"], topic: Topic::VulnerableProtections },
    ColumnRule { any: &["civil rights", "discrimination"], all: &[], topic: Topic::CivilRights },
    ColumnRule { any: &["disability", "functional"],       all: &[], topic: Topic::DisabilityNeeds },
    ColumnRule { any: &["language access"],                all: &[], topic: Topic::LanguageAccess },
    ColumnRule { any: &["equity"],                         all: &[], topic: Topic::EquityInitiatives },
    ColumnRule { any: &["emergency declaration"],          all: &[], topic: Topic::EmergencyDeclaration },
    ColumnRule { any: &["mitigation"],                     all: &[], topic: Topic::MitigationPlanning },
    ColumnRule { any: &["mutual aid"],                     all: &[], topic: Topic::MutualAid },
];

/// Classify a column header. Case-insensitive, first matching rule wins.
pub fn classify_column(header: &str) -> Option<Topic> {
    let lc = header.to_lowercase();
    COLUMN_RULES.iter().find(|r| r.matches(&lc)).map(|r| r.topic)
}

/* ---------------- Jurisdiction column ---------------- */

pub const JURISDICTION_HEADER_KEYS: [&str; 3] = ["state", "territory", "jurisdiction"];

/// Index of the first header naming the jurisdiction, if any.
pub fn find_jurisdiction_column(headers: &[String]) -> Option<usize> {
    headers.iter().position(|h| {
        let lc = h.to_lowercase();
        JURISDICTION_HEADER_KEYS.iter().any(|k| lc.contains(k))
    })
}

/// Labels that show up in the jurisdiction column when a sheet's second
/// header row was read as data.
pub const HEADER_LEAKAGE: [&str; 5] = ["Approach", "Aspect", "Impact Area", "Protection Area", "Region"];

/// True for jurisdiction cells that must not create a record.
pub fn is_non_jurisdiction(label: &str) -> bool {
    label.is_empty() || label == "nan" || HEADER_LEAKAGE.contains(&label)
}

/* ---------------- Regions ---------------- */

pub enum NameMatch {
    StartsWith(&'static str),
    Contains(&'static str),
}

impl NameMatch {
    fn matches(&self, file_name: &str) -> bool {
        match self {
            NameMatch::StartsWith(p) => file_name.starts_with(p),
            NameMatch::Contains(p) => file_name.contains(p),
        }
    }
}

pub struct RegionRule {
    pub any: &'static [NameMatch],
    pub region: Region,
}

pub static REGION_RULES: &[RegionRule] = &[
    RegionRule { any: &[NameMatch::StartsWith("CA-WA-OR")], region: Region::WestCoast },
    RegionRule { any: &[NameMatch::Contains("Southwest"), NameMatch::StartsWith("SW-")], region: Region::Southwest },
    RegionRule { any: &[NameMatch::Contains("Midwest")], region: Region::Midwest },
    RegionRule { any: &[NameMatch::Contains("Northeast")], region: Region::Northeast },
    RegionRule { any: &[NameMatch::Contains("Appalachia")], region: Region::Appalachia },
    RegionRule { any: &[NameMatch::Contains("MTN")], region: Region::MountainWest },
    RegionRule { any: &[NameMatch::Contains("AK-HI")], region: Region::AlaskaHawaii },
];

/// Region implied by a source file name (case-sensitive, first match wins).
/// `file_name` is the bare name, without directories.
pub fn region_for_file(file_name: &str) -> Region {
    REGION_RULES
        .iter()
        .find(|r| r.any.iter().any(|m| m.matches(file_name)))
        .map(|r| r.region)
        .unwrap_or(Region::Unknown)
}
