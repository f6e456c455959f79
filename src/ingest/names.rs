// src/ingest/names.rs
//! Jurisdiction name tables.
//!
//! - `NameMap`: rewrites truncated/composite source labels to canonical names.
//!   Starts from `DEFAULT_REMAP` and can be extended from the settings file.
//! - `postal_code`: canonical name → two-letter code (50 states + DC + PR).
//! - `is_us_state`: the fifty-state allow-list used by the summary counters.

use std::collections::BTreeMap;

/// Built-in label rewrites. "Others" → "Wisconsin" is a best guess from the
/// source sheets; override it in the settings file if a better mapping is known.
pub const DEFAULT_REMAP: [(&str, &str); 3] = [
    ("Iowa, etc.", "Iowa"),
    ("Others", "Wisconsin"),
    ("Guam, USVI, American Samoa, Northern Mariana I...", "Guam"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameMap {
    entries: BTreeMap<String, String>,
}

impl Default for NameMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_REMAP
                .iter()
                .map(|(from, to)| (s!(*from), s!(*to)))
                .collect(),
        }
    }
}

impl NameMap {
    /// Defaults plus `extra`; entries in `extra` win.
    pub fn with_overrides<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::default();
        for (k, v) in extra {
            map.insert(k, v);
        }
        map
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }

    /// Exact-match rewrite; unknown labels pass through unchanged.
    pub fn canonical<'a>(&'a self, label: &'a str) -> &'a str {
        self.entries.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/* ---------------- Postal codes ---------------- */

pub const POSTAL_CODES: [(&str, &str); 52] = [
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("Arkansas", "AR"),
    ("California", "CA"), ("Colorado", "CO"), ("Connecticut", "CT"), ("Delaware", "DE"),
    ("Florida", "FL"), ("Georgia", "GA"), ("Hawaii", "HI"), ("Idaho", "ID"),
    ("Illinois", "IL"), ("Indiana", "IN"), ("Iowa", "IA"), ("Kansas", "KS"),
    ("Kentucky", "KY"), ("Louisiana", "LA"), ("Maine", "ME"), ("Maryland", "MD"),
    ("Massachusetts", "MA"), ("Michigan", "MI"), ("Minnesota", "MN"), ("Mississippi", "MS"),
    ("Missouri", "MO"), ("Montana", "MT"), ("Nebraska", "NE"), ("Nevada", "NV"),
    ("New Hampshire", "NH"), ("New Jersey", "NJ"), ("New Mexico", "NM"), ("New York", "NY"),
    ("North Carolina", "NC"), ("North Dakota", "ND"), ("Ohio", "OH"), ("Oklahoma", "OK"),
    ("Oregon", "OR"), ("Pennsylvania", "PA"), ("Rhode Island", "RI"), ("South Carolina", "SC"),
    ("South Dakota", "SD"), ("Tennessee", "TN"), ("Texas", "TX"), ("Utah", "UT"),
    ("Vermont", "VT"), ("Virginia", "VA"), ("Washington", "WA"), ("West Virginia", "WV"),
    ("Wisconsin", "WI"), ("Wyoming", "WY"),
    ("District of Columbia", "DC"), ("Puerto Rico", "PR"),
];

/// Jurisdictions in `POSTAL_CODES` that are not one of the fifty states.
const NON_STATE_CODES: [&str; 2] = ["DC", "PR"];

/// Exact-name lookup.
pub fn postal_code(name: &str) -> Option<&'static str> {
    POSTAL_CODES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// True only for the fifty states (DC and territories excluded).
pub fn is_us_state(name: &str) -> bool {
    postal_code(name).is_some_and(|c| !NON_STATE_CODES.contains(&c))
}
