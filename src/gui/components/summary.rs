// src/gui/components/summary.rs
//
// Bottom panel: state count, average coverage, per-category counts and any
// ingestion warnings. The category row is hidden when the view is empty.

use eframe::egui::{self, Color32, RichText};

use crate::{
    data::{apply_filters, Aggregates, DataTypeFilter},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let report = &app.report;
    let view = apply_filters(&report.table, &app.state.filters);
    let agg = Aggregates::compute(&view);

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        metric(ui, "US States", agg.states.to_string());
        if agg.jurisdictions > agg.states {
            ui.label(RichText::new(format!("({} total jurisdictions)", agg.jurisdictions)).weak());
        }
        ui.separator();
        metric(ui, "Avg Data Coverage", format!("{:.1}%", agg.mean_coverage * 100.0));
    });

    if !view.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for c in DataTypeFilter::CATEGORIES {
                metric(ui, c.label(), agg.category_count(c).to_string());
                ui.separator();
            }
        });
    }

    if !report.errors.is_empty() || !report.skipped.is_empty() {
        egui::CollapsingHeader::new(format!(
            "Warnings: {} error(s), {} skipped file(s)",
            report.errors.len(),
            report.skipped.len()
        ))
        .id_salt("ingest_warnings")
        .show(ui, |ui| {
            for e in &report.errors {
                ui.label(RichText::new(e.to_string()).color(Color32::LIGHT_RED));
            }
            for s in &report.skipped {
                ui.label(format!("{}: {:?}", s.name, s.reason));
            }
        });
    }
    ui.add_space(4.0);
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).strong());
}
