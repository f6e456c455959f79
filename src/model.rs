// src/model.rs
//! Normalized data model: one `JurisdictionRecord` per state/territory.
//!
//! Records are built only by the ingestion engine (`crate::ingest`). Everything
//! downstream (filters, aggregates, GUI, CLI, export) reads a finished
//! `NormalizedTable` and never mutates it.

use std::collections::HashMap;
use std::fmt;

/// True when a topic cell counts as "having data": not blank and not the
/// literal `nan` that spreadsheet exports leave behind for missing cells.
#[inline]
pub fn has_data(value: &str) -> bool {
    !value.trim().is_empty() && value != "nan"
}

/* ---------------- Topics ---------------- */

/// The eleven tracked policy-topic fields, in canonical column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    KeyStatutes,
    LocalAuthority,
    NotableProvisions,
    VulnerableProtections,
    CivilRights,
    DisabilityNeeds,
    LanguageAccess,
    EquityInitiatives,
    EmergencyDeclaration,
    MitigationPlanning,
    MutualAid,
}

impl Topic {
    pub const COUNT: usize = 11;

    pub const ALL: [Topic; Topic::COUNT] = [
        Topic::KeyStatutes,
        Topic::LocalAuthority,
        Topic::NotableProvisions,
        Topic::VulnerableProtections,
        Topic::CivilRights,
        Topic::DisabilityNeeds,
        Topic::LanguageAccess,
        Topic::EquityInitiatives,
        Topic::EmergencyDeclaration,
        Topic::MitigationPlanning,
        Topic::MutualAid,
    ];

    #[inline]
    pub fn index(self) -> usize { self as usize }

    /// Snake-case field name, used for export headers and CLI output.
    pub fn key(self) -> &'static str {
        match self {
            Topic::KeyStatutes => "key_statutes",
            Topic::LocalAuthority => "local_authority",
            Topic::NotableProvisions => "notable_provisions",
            Topic::VulnerableProtections => "vulnerable_protections",
            Topic::CivilRights => "civil_rights",
            Topic::DisabilityNeeds => "disability_needs",
            Topic::LanguageAccess => "language_access",
            Topic::EquityInitiatives => "equity_initiatives",
            Topic::EmergencyDeclaration => "emergency_declaration",
            Topic::MitigationPlanning => "mitigation_planning",
            Topic::MutualAid => "mutual_aid",
        }
    }

    /// Human-readable heading.
    pub fn label(self) -> &'static str {
        match self {
            Topic::KeyStatutes => "Key Statutes",
            Topic::LocalAuthority => "Local Authority",
            Topic::NotableProvisions => "Notable Provisions",
            Topic::VulnerableProtections => "Vulnerable Population Protections",
            Topic::CivilRights => "Civil Rights",
            Topic::DisabilityNeeds => "Disability & Functional Needs",
            Topic::LanguageAccess => "Language Access",
            Topic::EquityInitiatives => "Equity Initiatives",
            Topic::EmergencyDeclaration => "Emergency Declaration",
            Topic::MitigationPlanning => "Mitigation Planning",
            Topic::MutualAid => "Mutual Aid",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/* ---------------- Regions ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    WestCoast,
    Southwest,
    Midwest,
    Northeast,
    Appalachia,
    MountainWest,
    AlaskaHawaii,
    #[default]
    Unknown,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::WestCoast,
        Region::Southwest,
        Region::Midwest,
        Region::Northeast,
        Region::Appalachia,
        Region::MountainWest,
        Region::AlaskaHawaii,
        Region::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::WestCoast => "West Coast",
            Region::Southwest => "Southwest",
            Region::Midwest => "Midwest",
            Region::Northeast => "Northeast",
            Region::Appalachia => "Appalachia",
            Region::MountainWest => "Mountain West",
            Region::AlaskaHawaii => "Alaska & Hawaii",
            Region::Unknown => "Unknown",
        }
    }

    /// Exact (case-sensitive) reverse of `name`.
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/* ---------------- Records ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct JurisdictionRecord {
    pub name: String,
    pub code: Option<&'static str>,
    pub region: Region,
    topics: [String; Topic::COUNT],
    coverage_score: f64,
}

impl JurisdictionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            region: Region::Unknown,
            topics: Default::default(),
            coverage_score: 0.0,
        }
    }

    #[inline]
    pub fn topic(&self, topic: Topic) -> &str {
        &self.topics[topic.index()]
    }

    #[inline]
    pub fn has(&self, topic: Topic) -> bool {
        has_data(self.topic(topic))
    }

    #[inline]
    pub fn coverage_score(&self) -> f64 {
        self.coverage_score
    }

    /// Write a topic cell. Values without data never replace existing text.
    /// The coverage score is recomputed before returning.
    /// Returns whether the field changed.
    pub fn merge_topic(&mut self, topic: Topic, value: &str) -> bool {
        if !has_data(value) {
            return false;
        }
        let slot = &mut self.topics[topic.index()];
        let changed = slot != value;
        if changed {
            *slot = s!(value);
        }
        self.recompute_coverage();
        changed
    }

    /// Count of topic fields with data.
    pub fn filled_topics(&self) -> usize {
        self.topics.iter().filter(|t| has_data(t)).count()
    }

    fn recompute_coverage(&mut self) {
        self.coverage_score = self.filled_topics() as f64 / Topic::COUNT as f64;
    }
}

/* ---------------- Table ---------------- */

/// Records in first-seen order, unique by `name`.
#[derive(Clone, Debug, Default)]
pub struct NormalizedTable {
    records: Vec<JurisdictionRecord>,
    by_name: HashMap<String, usize>,
}

impl NormalizedTable {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[JurisdictionRecord] { &self.records }

    pub fn get(&self, name: &str) -> Option<&JurisdictionRecord> {
        self.by_name.get(name).map(|&ix| &self.records[ix])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JurisdictionRecord> {
        self.records.iter()
    }

    /// Obtain the record for `name`, appending a fresh one on first sight.
    pub(crate) fn entry(&mut self, name: &str) -> &mut JurisdictionRecord {
        let ix = match self.by_name.get(name) {
            Some(&ix) => ix,
            None => {
                let ix = self.records.len();
                self.records.push(JurisdictionRecord::new(name));
                self.by_name.insert(s!(name), ix);
                ix
            }
        };
        &mut self.records[ix]
    }

    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut JurisdictionRecord> {
        self.records.iter_mut()
    }
}

impl<'a> IntoIterator for &'a NormalizedTable {
    type Item = &'a JurisdictionRecord;
    type IntoIter = std::slice::Iter<'a, JurisdictionRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_tracks_every_write() {
        let mut rec = JurisdictionRecord::new("Ohio");
        assert_eq!(rec.coverage_score(), 0.0);

        for (n, topic) in Topic::ALL.into_iter().enumerate() {
            rec.merge_topic(topic, "text");
            let expected = (n + 1) as f64 / 11.0;
            assert!((rec.coverage_score() - expected).abs() < 1e-12, "after {topic}");
            assert_eq!(rec.filled_topics(), n + 1);
        }
        assert_eq!(rec.coverage_score(), 1.0);
    }

    #[test]
    fn empty_values_never_erase() {
        let mut rec = JurisdictionRecord::new("Ohio");
        assert!(rec.merge_topic(Topic::VulnerableProtections, "X"));
        assert!(!rec.merge_topic(Topic::VulnerableProtections, ""));
        assert!(!rec.merge_topic(Topic::VulnerableProtections, "nan"));
        assert!(!rec.merge_topic(Topic::VulnerableProtections, "   "));
        assert_eq!(rec.topic(Topic::VulnerableProtections), "X");

        assert!(rec.merge_topic(Topic::VulnerableProtections, "Y"));
        assert_eq!(rec.topic(Topic::VulnerableProtections), "Y");
        assert_eq!(rec.filled_topics(), 1);
    }

    #[test]
    fn table_entries_are_unique_and_ordered() {
        let mut t = NormalizedTable::new();
        t.entry("Ohio").merge_topic(Topic::MutualAid, "a");
        t.entry("Iowa");
        t.entry("Ohio").merge_topic(Topic::EquityInitiatives, "b");

        let names: Vec<&str> = t.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ohio", "Iowa"]);
        assert_eq!(t.get("Ohio").map(|r| r.filled_topics()), Some(2));
        assert_eq!(t.position("Iowa"), Some(1));
    }

    #[test]
    fn region_names_round_trip() {
        for r in Region::ALL {
            assert_eq!(Region::from_name(r.name()), Some(r));
        }
        assert_eq!(Region::from_name("midwest"), None);
    }
}
