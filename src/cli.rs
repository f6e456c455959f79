// src/cli.rs
//! Command-line frontend: ingest the data directory once, then print or
//! export a filtered view.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{bail, Result};

use crate::config::consts::{EMPTY_VIEW_MESSAGE, SETTINGS_FILE};
use crate::config::options::{AppOptions, ExportFormat, ExportOptions};
use crate::config::settings::Settings;
use crate::config::state::FilterState;
use crate::data::{apply_filters, region_options, Aggregates, CoverageLevel, DataTypeFilter};
use crate::file;
use crate::ingest::{ingest, FileSet, IngestReport};
use crate::model::NormalizedTable;
use crate::present::{select_by_code, DetailPanel};

/// Disaster-law data coverage across US states and territories.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    pub config: PathBuf,

    /// Directory holding the input spreadsheets (overrides settings)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Jurisdiction counts, average coverage and per-category counts.
    Summary(FilterArgs),
    /// One line per filtered jurisdiction.
    List(FilterArgs),
    /// Detail panel for one jurisdiction, by name or postal code.
    Show { target: String },
    /// Region filter options.
    Regions,
    /// Write the filtered table to CSV/TSV.
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output file; extension is replaced by the format's
        #[arg(short = 'o', long = "out")]
        out: Option<String>,
        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,
        /// Write a header row (the default)
        #[arg(long, overrides_with = "no_headers")]
        include_headers: bool,
        /// Omit the header row
        #[arg(long, overrides_with = "include_headers")]
        no_headers: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// All, vulnerable-protections, equity-initiatives, civil-rights,
    /// language-access, disability-provisions, emergency-powers
    #[arg(long, value_parser = parse_data_type)]
    pub data_type: Option<DataTypeFilter>,

    /// "All" or a region name, e.g. "Midwest"
    #[arg(long)]
    pub region: Option<String>,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        let mut st = FilterState::default();
        if let Some(f) = self.data_type { st.set_data_type(f); }
        if let Some(r) = &self.region { st.set_region(r.trim()); }
        st
    }
}

fn parse_data_type(s: &str) -> Result<DataTypeFilter, String> {
    DataTypeFilter::parse(s).ok_or_else(|| format!("unknown data type: {s}"))
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_ext(s).ok_or_else(|| format!("unknown format: {s} (csv|tsv)"))
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli.config)?;
    let mut options = AppOptions::from_settings(&settings);
    if let Some(dir) = &cli.data_dir {
        options.ingest.data_dir = dir.clone();
    }

    let set = FileSet::scan(&options.ingest.data_dir)?;
    let report = ingest(&set, &options.ingest.name_map, None);
    print_warnings(&report);
    let table = &report.table;

    match cli.command {
        Command::Summary(f) => print!("{}", render_summary(table, &f.to_state())),
        Command::List(f) => print!("{}", render_list(table, &f.to_state())),
        Command::Show { target } => {
            let Some(name) = resolve_target(table, &target) else {
                bail!("no jurisdiction matches '{target}'");
            };
            if let Some(panel) = DetailPanel::for_selection(table, Some(name)) {
                print!("{}", panel.to_text());
            }
        }
        Command::Regions => {
            for r in region_options(table) {
                println!("{r}");
            }
        }
        Command::Export { filters, out, format, include_headers, no_headers } => {
            let export = &mut options.export;
            let headers = match (include_headers, no_headers) {
                (_, true) => Some(false),
                (true, false) => Some(true),
                (false, false) => None,
            };
            apply_export_args(export, out.as_deref(), format, headers);

            let st = filters.to_state();
            let view = apply_filters(table, &st);
            let path = file::write_export_single(export, &view)?;
            eprintln!("Exported {} row(s) to {}", view.len(), path.display());
        }
    }
    Ok(())
}

/// Export flags over the configured options. `-o` first, so an explicit
/// `--format` beats the extension it carries. Headers stay on unless asked.
pub fn apply_export_args(
    export: &mut ExportOptions,
    out: Option<&str>,
    format: Option<ExportFormat>,
    headers: Option<bool>,
) {
    if let Some(p) = out { export.set_path(p); }
    if let Some(fmt) = format { export.format = fmt; }
    if let Some(h) = headers { export.include_headers = h; }
}

fn print_warnings(report: &IngestReport) {
    for e in &report.errors {
        eprintln!("warning: {e}");
    }
}

/// Exact name first, then a postal code (case-insensitive).
pub fn resolve_target<'a>(table: &'a NormalizedTable, target: &str) -> Option<&'a str> {
    let t = target.trim();
    table
        .get(t)
        .map(|r| r.name.as_str())
        .or_else(|| select_by_code(table, &t.to_ascii_uppercase()))
}

pub fn render_summary(table: &NormalizedTable, st: &FilterState) -> String {
    let view = apply_filters(table, st);
    if view.is_empty() {
        return format!("{EMPTY_VIEW_MESSAGE}\n");
    }
    let agg = Aggregates::compute(&view);

    let mut out = format!("US States: {}", agg.states);
    if agg.jurisdictions > agg.states {
        out.push_str(&format!(" ({} total jurisdictions)", agg.jurisdictions));
    }
    out.push_str(&format!("\nAvg Data Coverage: {:.1}%\n\n", agg.mean_coverage * 100.0));
    for c in DataTypeFilter::CATEGORIES {
        out.push_str(&format!("{:<24}{}\n", c.label(), agg.category_count(c)));
    }
    out
}

pub fn render_list(table: &NormalizedTable, st: &FilterState) -> String {
    let view = apply_filters(table, st);
    if view.is_empty() {
        return format!("{EMPTY_VIEW_MESSAGE}\n");
    }
    let mut out = s!();
    for r in view.records() {
        out.push_str(&format!(
            "{:<24} {:<3} {:<16} {:>6.1}%  {}\n",
            r.name,
            r.code.unwrap_or("-"),
            r.region.name(),
            r.coverage_score() * 100.0,
            CoverageLevel::of(r.coverage_score()),
        ));
    }
    out
}
