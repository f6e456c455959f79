// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;

pub mod map;
pub mod table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Map,
    Table,
}

/// A central-panel tab. Pages read the current report and filters from `App`
/// and may change the selection; they never touch the table.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
