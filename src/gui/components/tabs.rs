// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Both pages read the same filtered view, so a switch needs no rebuild.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.current_page().kind(), page.kind());
                app.set_current_index(idx);
            }
        }
    });
}
