// src/gui/actions/reload.rs
//
// Re-scan the data directory and swap in the (possibly cached) report.
// The previous report stays on screen until the new one is complete.

use std::sync::Arc;

use crate::{
    ingest::{FileSet, IngestReport},
    gui::{app::App, progress::GuiProgress},
};

pub fn reload(app: &mut App) {
    let dir = app.state.options.ingest.data_dir.clone();

    let set = match FileSet::scan(&dir) {
        Ok(set) => set,
        Err(e) => {
            loge!("Reload: {}", e);
            app.report = Arc::new(IngestReport::default());
            app.cache.invalidate();
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut progress = GuiProgress::new(Arc::clone(&app.status));
    let report = app.cache.get_or_ingest(&set, &app.state.options.ingest.name_map, Some(&mut progress));

    let unchanged = Arc::ptr_eq(&report, &app.report);
    app.report = report;

    let r = &app.report;
    let mut msg = format!("{} jurisdiction(s) from {} file(s)", r.table.len(), r.files.len());
    if r.has_errors() {
        logw!("Reload: {} of {} file(s) could not be read", r.errors.len(), set.len());
        msg.push_str(&format!(", {} file error(s)", r.errors.len()));
    }
    if unchanged {
        msg.push_str(" (unchanged)");
    }
    logf!("Reload: {} [{:?}]", msg, app.cache.fingerprint());
    app.status(msg);
}
