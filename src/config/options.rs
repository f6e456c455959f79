// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ingest::NameMap;
use super::consts::*;
use super::settings::Settings;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub ingest: IngestOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Options seeded from the on-disk settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ingest: IngestOptions {
                data_dir: settings.data_dir.clone(),
                name_map: NameMap::with_overrides(settings.name_remap.clone()),
            },
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestOptions {
    /// Directory scanned for input spreadsheets (non-recursive).
    pub data_dir: PathBuf,
    pub name_map: NameMap,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            name_map: NameMap::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows `format`.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse user text into dir + stem. A pasted extension is ignored unless
    /// it names a known format, in which case it also sets `format`.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        if let Some(fmt) = p.extension().and_then(|e| e.to_str()).and_then(ExportFormat::from_ext) {
            self.format = fmt;
        }
    }

    pub fn delim(&self) -> char { self.format.delim() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_path_follows_format() {
        let mut e = ExportOptions::default();
        assert_eq!(e.out_path(), PathBuf::from("out").join("jurisdictions.csv"));

        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("out").join("jurisdictions.tsv"));
    }

    #[test]
    fn set_path_splits_dir_stem_and_known_ext() {
        let mut e = ExportOptions::default();
        e.set_path(" reports/midwest.tsv ");
        assert_eq!(e.format, ExportFormat::Tsv);
        assert_eq!(e.out_path(), PathBuf::from("reports").join("midwest.tsv"));

        e.set_path("reports/midwest.txt");
        assert_eq!(e.format, ExportFormat::Tsv);
        assert_eq!(e.out_path(), PathBuf::from("reports").join("midwest.tsv"));
    }
}
