// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();

        // --- Output field ---
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(220.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        // --- Actions ---
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
