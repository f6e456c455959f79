// src/gui/components/data_table.rs
//
// Striped table of the filtered jurisdictions. Clicking a row selects it.
// Purely a view over the current report; only the selection is written back.

use std::sync::Arc;

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::EMPTY_VIEW_MESSAGE,
    data::{apply_filters, CoverageLevel, DataTypeFilter},
    gui::app::App,
    model::Topic,
};

const HEADERS: [&str; 5] = ["Name", "Code", "Region", "Coverage", "Level"];
const WIDTHS: [f32; 5] = [170.0, 44.0, 120.0, 72.0, 110.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let report = Arc::clone(&app.report);
    let view = apply_filters(&report.table, &app.state.filters);

    if view.is_empty() {
        ui.label(EMPTY_VIEW_MESSAGE);
        return;
    }

    let selected = app.state.filters.selected_jurisdiction.clone();
    let mut clicked: Option<String> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }
    for _ in DataTypeFilter::CATEGORIES {
        table = table.column(Column::initial(28.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
            for c in DataTypeFilter::CATEGORIES {
                header.col(|ui| {
                    ui.strong(abbrev(c)).on_hover_text(c.label());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(rec) = view.get(row.index()) else { return };
                row.set_selected(selected.as_deref() == Some(rec.name.as_str()));

                row.col(|ui| { ui.label(&rec.name); });
                row.col(|ui| { ui.label(rec.code.unwrap_or("")); });
                row.col(|ui| { ui.label(rec.region.name()); });
                row.col(|ui| { ui.label(format!("{:.1}%", rec.coverage_score() * 100.0)); });
                row.col(|ui| { ui.label(CoverageLevel::of(rec.coverage_score()).label()); });
                for c in DataTypeFilter::CATEGORIES {
                    let has = c.topic().is_some_and(|t: Topic| rec.has(t));
                    row.col(|ui| {
                        ui.label(if has { RichText::new("●") } else { RichText::new("·").weak() });
                    });
                }

                if row.response().clicked() {
                    clicked = Some(rec.name.clone());
                }
            });
        });

    if let Some(name) = clicked {
        logf!("UI: Table click → {}", name);
        app.state.filters.select(name);
    }
}

fn abbrev(c: DataTypeFilter) -> &'static str {
    match c {
        DataTypeFilter::All => "",
        DataTypeFilter::VulnerableProtections => "VP",
        DataTypeFilter::EquityInitiatives => "EI",
        DataTypeFilter::CivilRights => "CR",
        DataTypeFilter::LanguageAccess => "LA",
        DataTypeFilter::DisabilityProvisions => "DP",
        DataTypeFilter::EmergencyPowers => "EP",
    }
}
