// src/gui/actions/copy.rs
use std::sync::Arc;

use eframe::egui;
use crate::{data::apply_filters, file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let report = Arc::clone(&app.report);
    let view = apply_filters(&report.table, &app.state.filters);

    if view.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::export_string(&app.state.options.export, &view);
    logf!("Copy: rows={}, format={:?}", view.len(), app.state.options.export.format);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", view.len()));
}
