// src/gui/components/filter_bar.rs
//
// Title, the two filter combo boxes, Reload, and the status line.

use eframe::egui;

use crate::{
    data::{region_options, DataTypeFilter},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading("Disaster Law Data Discovery");
    ui.label(
        egui::RichText::new(
            "Explore which disaster-law data exists for each state, not how strong the protections are.",
        )
        .italics()
        .weak(),
    );
    ui.add_space(4.0);

    let regions = region_options(&app.report.table);

    ui.horizontal(|ui| {
        let filters = &mut app.state.filters;

        let mut data_type = filters.data_type;
        egui::ComboBox::from_label("Data Type")
            .selected_text(data_type.label())
            .show_ui(ui, |ui| {
                for f in DataTypeFilter::ALL {
                    ui.selectable_value(&mut data_type, f, f.label());
                }
            });
        filters.set_data_type(data_type);

        ui.add_space(12.0);

        let mut region = filters.region.clone();
        egui::ComboBox::from_label("Region")
            .selected_text(region.as_str())
            .show_ui(ui, |ui| {
                for r in &regions {
                    ui.selectable_value(&mut region, r.clone(), r.as_str());
                }
            });
        filters.set_region(region);

        ui.add_space(12.0);

        if ui.button("Reload").on_hover_text("Re-scan the data directory").clicked() {
            logf!("UI: Reload clicked");
            actions::reload(app);
        }

        ui.separator();
        ui.label(app.status_text());
    });
    ui.add_space(4.0);
}
