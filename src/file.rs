// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::FilteredView;
use crate::error::ExportError;
use crate::model::Topic;

const FIXED_COLUMNS: [&str; 4] = ["name", "code", "region", "coverage_score"];

/// name, code, region, coverage_score, then the eleven topic fields.
pub fn export_headers() -> Vec<String> {
    FIXED_COLUMNS
        .iter()
        .map(|h| s!(*h))
        .chain(Topic::ALL.iter().map(|t| s!(t.key())))
        .collect()
}

/// One row per record in the view, in view order.
pub fn export_rows(view: &FilteredView<'_>) -> Vec<Vec<String>> {
    view.records()
        .map(|r| {
            let mut row = Vec::with_capacity(FIXED_COLUMNS.len() + Topic::COUNT);
            row.push(r.name.clone());
            row.push(s!(r.code.unwrap_or("")));
            row.push(s!(r.region.name()));
            row.push(format!("{:.4}", r.coverage_score()));
            row.extend(Topic::ALL.iter().map(|&t| s!(r.topic(t))));
            row
        })
        .collect()
}

/// Export text for Copy / Export, honoring format and header policy.
pub fn export_string(export: &ExportOptions, view: &FilteredView<'_>) -> String {
    to_export_string(&export_headers(), &export_rows(view), export.include_headers, export.delim())
}

/// Write the filtered table to `export.out_path()`. Returns the path written.
pub fn write_export_single(
    export: &ExportOptions,
    view: &FilteredView<'_>,
) -> Result<PathBuf, ExportError> {
    if view.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = export_string(export, view);
    fs::write(&path, contents)
        .map_err(|source| ExportError::Io { path: path.clone(), source })?;
    logf!("Export: Wrote {} row(s) → {}", view.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
