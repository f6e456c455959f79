// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are dropped; a leading UTF-8 BOM is ignored.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split off the first row as the header row. Short data rows are padded
/// with empty cells so every row is at least as wide as the header.
pub fn split_header(mut rows: Vec<Vec<String>>) -> (Vec<String>, Vec<Vec<String>>) {
    if rows.is_empty() { return (Vec::new(), rows); }
    let headers = rows.remove(0);
    for r in rows.iter_mut() {
        if r.len() < headers.len() {
            r.resize(headers.len(), s!());
        }
    }
    (headers, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string (Copy/Export).
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    // Writes into a Vec<u8> cannot fail; the io::Result is only for file sinks.
    let mut buf: Vec<u8> = Vec::new();

    if include_headers && !headers.is_empty() {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let text = "\u{feff}State,Notes\r\n\"Ohio\",\"a, \"\"b\"\"\nc\"\r\n\r\nIowa,\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["State", "Notes"]);
        assert_eq!(rows[1], vec!["Ohio", "a, \"b\"\nc"]);
        assert_eq!(rows[2], vec!["Iowa", ""]);
    }

    #[test]
    fn header_split_pads_short_rows() {
        let rows = parse_rows("A\tB\tC\nx\ny\tz\n", '\t');
        let (h, body) = split_header(rows);
        assert_eq!(h, vec!["A", "B", "C"]);
        assert_eq!(body[0], vec!["x", "", ""]);
        assert_eq!(body[1], vec!["y", "z", ""]);
    }

    #[test]
    fn export_quotes_when_needed() {
        let headers = vec![s!("name"), s!("notes")];
        let rows = vec![vec![s!("Ohio"), s!("a,b")]];
        let out = to_export_string(&headers, &rows, true, ',');
        assert_eq!(out, "name,notes\nOhio,\"a,b\"\n");

        let out = to_export_string(&headers, &rows, false, '\t');
        assert_eq!(out, "Ohio\ta,b\n");
    }
}
