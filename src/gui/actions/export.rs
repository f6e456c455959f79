// src/gui/actions/export.rs
use std::sync::Arc;

use crate::{data::apply_filters, error::ExportError, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let report = Arc::clone(&app.report);
    let view = apply_filters(&report.table, &app.state.filters);

    logf!(
        "Export: Begin rows={}, format={:?}, headers={}",
        view.len(),
        app.state.options.export.format,
        app.state.options.export.include_headers
    );

    let msg = match file::write_export_single(&app.state.options.export, &view) {
        Ok(path) => format!("Exported {} row(s) to {}", view.len(), path.display()),
        Err(ExportError::NothingToExport) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
