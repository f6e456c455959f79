// src/gui/pages/map.rs
use eframe::egui;

use crate::gui::{app::App, components::tile_map};
use super::{Page, PageKind};

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

impl Page for MapPage {
    fn kind(&self) -> PageKind { PageKind::Map }
    fn title(&self) -> &'static str { "Map" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        tile_map::draw(ui, app);
        ui.add_space(6.0);
        tile_map::legend(ui);
    }
}
