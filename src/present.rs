// src/present.rs
//
// Shapes the normalized table for the map, the detail panel and the CLI.
// Nothing here mutates the table or the filter state.

use crate::config::consts::{ELLIPSIS, STATUTES_BUDGET, VULNERABLE_BUDGET};
use crate::data::{CoverageLevel, FilteredView};
use crate::model::{JurisdictionRecord, NormalizedTable, Region, Topic};

/* ---------------- Map ---------------- */

/// One colored map cell: (code, coverage_score, name, region).
#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint<'a> {
    pub code: &'static str,
    pub coverage_score: f64,
    pub name: &'a str,
    pub region: Region,
}

/// Map tuples for every record in the view that has a postal code.
/// Records without a code stay in the table view but are not drawn.
pub fn map_points<'a>(view: &FilteredView<'a>) -> Vec<MapPoint<'a>> {
    view.records()
        .filter_map(|r| {
            r.code.map(|code| MapPoint {
                code,
                coverage_score: r.coverage_score(),
                name: r.name.as_str(),
                region: r.region,
            })
        })
        .collect()
}

/// Resolve a clicked postal code against the full table (not the filtered
/// view), returning the canonical name to select.
pub fn select_by_code<'a>(table: &'a NormalizedTable, code: &str) -> Option<&'a str> {
    table.iter().find(|r| r.code == Some(code)).map(|r| r.name.as_str())
}

const RAMP: [[u8; 3]; 3] = [
    [0x64, 0x74, 0x8b], // gray
    [0x3b, 0x82, 0xf6], // blue
    [0x06, 0xb6, 0xd4], // cyan
];

/// Gray → blue → cyan over [0, 1]. Out-of-range scores clamp.
pub fn coverage_color(score: f64) -> [u8; 3] {
    let t = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    let (a, b, local) = if t <= 0.5 {
        (RAMP[0], RAMP[1], t * 2.0)
    } else {
        (RAMP[1], RAMP[2], (t - 0.5) * 2.0)
    };
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = a[i] as f64 + (b[i] as f64 - a[i] as f64) * local;
        out[i] = v.round() as u8;
    }
    out
}

/* ---------------- Detail panel ---------------- */

/// First `budget` characters plus `...` when `text` is longer; unchanged otherwise.
pub fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => join!(&text[..cut], ELLIPSIS),
        None => s!(text),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailPanel {
    pub name: String,
    pub code: Option<&'static str>,
    pub coverage_score: f64,
    pub level: CoverageLevel,
    pub region: Region,
    pub sections: Vec<DetailSection>,
}

impl DetailPanel {
    pub fn from_record(rec: &JurisdictionRecord) -> Self {
        let shown = [
            (Topic::VulnerableProtections, Some(VULNERABLE_BUDGET)),
            (Topic::KeyStatutes, Some(STATUTES_BUDGET)),
            (Topic::EquityInitiatives, None),
        ];
        let sections = shown
            .into_iter()
            .filter(|(t, _)| !rec.topic(*t).is_empty())
            .map(|(t, budget)| {
                let text = rec.topic(t);
                DetailSection {
                    heading: t.label(),
                    body: budget.map_or_else(|| s!(text), |b| truncate_chars(text, b)),
                }
            })
            .collect();

        Self {
            name: rec.name.clone(),
            code: rec.code,
            coverage_score: rec.coverage_score(),
            level: CoverageLevel::of(rec.coverage_score()),
            region: rec.region,
            sections,
        }
    }

    /// Panel for the selected name, looked up in the full table.
    pub fn for_selection(table: &NormalizedTable, selected: Option<&str>) -> Option<Self> {
        selected.and_then(|n| table.get(n)).map(Self::from_record)
    }

    /// `"18.2%"`
    pub fn coverage_text(&self) -> String { format!("{:.1}%", self.coverage_score * 100.0) }

    /// Plain-text rendering (CLI `show`).
    pub fn to_text(&self) -> String {
        let mut out = match self.code {
            Some(c) => format!("{} ({})\n", self.name, c),
            None => format!("{}\n", self.name),
        };
        out.push_str(&format!("Data Coverage: {} ({})\n", self.coverage_text(), self.level));
        out.push_str(&format!("Region: {}\n", self.region));
        for s in &self.sections {
            out.push_str(&format!("\n{}\n{}\n", s.heading, s.body));
        }
        out
    }
}
