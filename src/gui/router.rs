// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::map::PAGE,
    &pages::table::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Index into `PAGES`; out-of-range falls back to the first page.
pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(PAGES[0])
}
