// src/gui/pages/table.rs
use eframe::egui;

use crate::gui::{app::App, components::data_table};
use super::{Page, PageKind};

pub struct TablePage;
pub static PAGE: TablePage = TablePage;

impl Page for TablePage {
    fn kind(&self) -> PageKind { PageKind::Table }
    fn title(&self) -> &'static str { "Table" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        data_table::draw(ui, app);
    }
}
