// src/config/consts.rs

// Input
pub const DEFAULT_DATA_DIR: &str = ".";
pub const INPUT_EXTENSIONS: [&str; 7] = ["xlsx", "xlsm", "xls", "xlsb", "ods", "csv", "tsv"];

// Settings / logs
pub const SETTINGS_FILE: &str = "disaster_dash.json";
pub const LOG_FILE: &str = ".store/debug.log";

// Detail panel character budgets
pub const VULNERABLE_BUDGET: usize = 300;
pub const STATUTES_BUDGET: usize = 200;
pub const ELLIPSIS: &str = "...";

// Coverage levels (inclusive lower bounds)
pub const RICH_THRESHOLD: f64 = 0.7;
pub const MODERATE_THRESHOLD: f64 = 0.4;

// Filters
pub const ALL_OPTION: &str = "All";
pub const EMPTY_VIEW_MESSAGE: &str = "No states match the current filter criteria.";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "jurisdictions";
