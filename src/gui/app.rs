// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, settings::Settings, state::AppState},
    ingest::{IngestCache, IngestReport},
};

use super::{
    actions,
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, settings: Settings) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Disaster Law Data Discovery",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(settings)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // ingestion cache + the report currently on screen
    pub cache: IngestCache,
    pub report: Arc<IngestReport>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let state = AppState {
            options: AppOptions::from_settings(&settings),
            ..AppState::default()
        };
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            cache: IngestCache::new(),
            report: Arc::default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        logf!("Init: data_dir={}", app.state.options.ingest.data_dir.display());
        actions::reload(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            components::filter_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            components::summary::draw(ui, self);
        });

        egui::SidePanel::right("detail")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                components::detail_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();
            components::export_bar::draw(ui, self);
            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
