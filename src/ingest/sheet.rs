// src/ingest/sheet.rs
//! Reads one source file into a header + rows grid of strings.
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xls`, `.xlsb`, `.ods`) go through `calamine`:
//! first worksheet only, first row is the header. Delimited text (`.csv`,
//! `.tsv`) goes through `crate::csv`. Cells that cannot be read become `""`.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::csv::{parse_rows, split_header};
use crate::error::IngestError;

use super::source::SourceFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetFormat {
    Workbook,
    Delimited(char),
}

impl SheetFormat {
    /// Format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Some(SheetFormat::Workbook),
            "csv" => Some(SheetFormat::Delimited(',')),
            "tsv" => Some(SheetFormat::Delimited('\t')),
            _ => None,
        }
    }

    pub fn for_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Cell text; out-of-range cells read as empty.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
}

pub fn read_sheet(file: &SourceFile) -> Result<Sheet, IngestError> {
    let format = SheetFormat::for_name(&file.name)
        .ok_or_else(|| IngestError::Unsupported { path: file.name.clone() })?;

    let mut sheet = match format {
        SheetFormat::Workbook => read_workbook(file)?,
        SheetFormat::Delimited(sep) => {
            let text = String::from_utf8_lossy(&file.bytes);
            let (headers, rows) = split_header(parse_rows(&text, sep));
            Sheet { headers, rows }
        }
    };

    name_blank_headers(&mut sheet.headers);
    Ok(sheet)
}

fn read_workbook(file: &SourceFile) -> Result<Sheet, IngestError> {
    let mut wb = open_workbook_auto_from_rs(Cursor::new(file.bytes.as_slice()))
        .map_err(|e| IngestError::Workbook { path: file.name.clone(), reason: e.to_string() })?;

    let range = wb
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook { path: file.name.clone() })?
        .map_err(|e| IngestError::Workbook { path: file.name.clone(), reason: e.to_string() })?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(r) => r.iter().map(cell_text).collect(),
        None => return Ok(Sheet::default()),
    };
    let body = rows
        .map(|r| r.iter().map(cell_text).collect::<Vec<String>>())
        .filter(|r| r.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(Sheet { headers, rows: body })
}

/// Spreadsheet cell → text. Integral floats print without a fraction.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => s!(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn name_blank_headers(headers: &mut [String]) {
    for (i, h) in headers.iter_mut().enumerate() {
        if h.trim().is_empty() {
            *h = format!("Unnamed: {i}");
        }
    }
}
