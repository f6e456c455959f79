// src/gui/components/detail_panel.rs
//
// Right-side panel for the selected jurisdiction. The record is looked up in
// the full table, so a selection the filters now hide is still shown.

use eframe::egui::{self, RichText};

use crate::{data::apply_filters, gui::app::App, present::DetailPanel};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.heading("State Details");
    ui.separator();

    let selected = app.state.filters.selected_jurisdiction.clone();
    let Some(panel) = DetailPanel::for_selection(&app.report.table, selected.as_deref()) else {
        ui.label("Click a state on the map or a row in the table to view its disaster law information.");
        return;
    };

    let title = match panel.code {
        Some(code) => format!("{} ({})", panel.name, code),
        None => panel.name.clone(),
    };
    ui.label(RichText::new(title).strong().size(18.0));
    ui.add_space(4.0);

    egui::Grid::new("detail_metrics").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
        ui.label("Data Coverage");
        ui.label(format!("{}  ({})", panel.coverage_text(), panel.level));
        ui.end_row();
        ui.label("Region");
        ui.label(panel.region.name());
        ui.end_row();
    });

    if !apply_filters(&app.report.table, &app.state.filters).contains(&panel.name) {
        ui.label(RichText::new("Not in the current filter selection").weak().italics());
    }

    if ui.small_button("Clear selection").clicked() {
        logd!("UI: Selection cleared");
        app.state.filters.clear_selection();
    }

    ui.add_space(8.0);
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for s in &panel.sections {
            ui.label(RichText::new(s.heading).strong());
            ui.label(&s.body);
            ui.add_space(8.0);
        }
        if panel.sections.is_empty() {
            ui.label(RichText::new("No detail text recorded for this jurisdiction.").weak());
        }
    });
}
