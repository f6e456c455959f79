// src/gui/components/tile_map.rs
//
// Tile-grid map of the US: one square per postal code, colored by coverage.
// Tiles for jurisdictions in the filtered view use the coverage ramp; tiles
// the filters hide are dimmed; codes with no record are outlined only.
// Clicking any tile with a record selects it.

use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::{
    config::consts::EMPTY_VIEW_MESSAGE,
    data::apply_filters,
    gui::app::App,
    present::{coverage_color, map_points, select_by_code},
};

const COLS: usize = 12;
const ROWS: usize = 8;

/// (code, column, row)
static TILES: &[(&str, u8, u8)] = &[
    ("AK", 0, 0), ("ME", 11, 0),
    ("WI", 6, 1), ("VT", 10, 1), ("NH", 11, 1),
    ("WA", 1, 2), ("ID", 2, 2), ("MT", 3, 2), ("ND", 4, 2), ("MN", 5, 2), ("IL", 6, 2), ("MI", 7, 2), ("NY", 9, 2), ("MA", 10, 2),
    ("OR", 1, 3), ("NV", 2, 3), ("WY", 3, 3), ("SD", 4, 3), ("IA", 5, 3), ("IN", 6, 3), ("OH", 7, 3), ("PA", 8, 3), ("NJ", 9, 3), ("CT", 10, 3), ("RI", 11, 3),
    ("CA", 1, 4), ("UT", 2, 4), ("CO", 3, 4), ("NE", 4, 4), ("MO", 5, 4), ("KY", 6, 4), ("WV", 7, 4), ("VA", 8, 4), ("MD", 9, 4), ("DE", 10, 4),
    ("AZ", 2, 5), ("NM", 3, 5), ("KS", 4, 5), ("AR", 5, 5), ("TN", 6, 5), ("NC", 7, 5), ("SC", 8, 5), ("DC", 9, 5),
    ("OK", 4, 6), ("LA", 5, 6), ("MS", 6, 6), ("AL", 7, 6), ("GA", 8, 6),
    ("HI", 0, 7), ("TX", 4, 7), ("FL", 9, 7), ("PR", 11, 7),
];

const GAP: f32 = 3.0;
const HIDDEN_FILL: Color32 = Color32::from_rgb(0x2a, 0x2f, 0x38);
const SELECTED_STROKE: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);

fn rgb(c: [u8; 3]) -> Color32 { Color32::from_rgb(c[0], c[1], c[2]) }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let report = Arc::clone(&app.report);
    let view = apply_filters(&report.table, &app.state.filters);

    if view.is_empty() {
        ui.label(EMPTY_VIEW_MESSAGE);
        return;
    }

    // code -> (score, name) for visible jurisdictions
    let visible: HashMap<&str, (f64, &str)> = map_points(&view)
        .into_iter()
        .map(|p| (p.code, (p.coverage_score, p.name)))
        .collect();

    let avail = ui.available_size();
    let cell = (avail.x / COLS as f32).min((avail.y - 40.0).max(120.0) / ROWS as f32).max(18.0);
    let size = Vec2::new(cell * COLS as f32, cell * ROWS as f32);

    let (resp, painter) = ui.allocate_painter(size, Sense::click());
    let origin = resp.rect.min;
    let hover = resp.hover_pos();
    let selected_code = app
        .state
        .filters
        .selected_jurisdiction
        .as_deref()
        .and_then(|n| report.table.get(n))
        .and_then(|r| r.code);

    let mut hovered: Option<&str> = None;

    for &(code, col, row) in TILES {
        let min = origin + Vec2::new(col as f32 * cell, row as f32 * cell);
        let rect = Rect::from_min_size(min, Vec2::splat(cell - GAP));
        let known = select_by_code(&report.table, code).is_some();

        let (fill, text_color) = match visible.get(code) {
            Some(&(score, _)) => (rgb(coverage_color(score)), Color32::WHITE),
            None if known => (HIDDEN_FILL, Color32::GRAY),
            None => (Color32::TRANSPARENT, Color32::DARK_GRAY),
        };

        painter.rect_filled(rect, 3.0, fill);
        let stroke = if selected_code == Some(code) {
            Stroke::new(2.5, SELECTED_STROKE)
        } else {
            Stroke::new(1.0, Color32::from_gray(70))
        };
        painter.rect_stroke(rect, 3.0, stroke, StrokeKind::Inside);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            code,
            FontId::proportional((cell * 0.32).clamp(9.0, 16.0)),
            text_color,
        );

        if hover.is_some_and(|p| rect.contains(p)) {
            hovered = Some(code);
        }
    }

    if resp.clicked() {
        if let Some(code) = hovered {
            match select_by_code(&report.table, code) {
                Some(name) => {
                    logf!("UI: Map click {} → {}", code, name);
                    app.state.filters.select(name);
                }
                None => logd!("UI: Map click {} has no record", code),
            }
        }
    }

    if let Some(code) = hovered {
        let tip = match visible.get(code) {
            Some(&(score, name)) => format!("{name}\nData Coverage: {:.1}%", score * 100.0),
            None => match select_by_code(&report.table, code) {
                Some(name) => format!("{name}\n(hidden by filters)"),
                None => format!("{code}\n(no data)"),
            },
        };
        resp.on_hover_text_at_pointer(tip);
    }
}

/// Color ramp legend under the map.
pub fn legend(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Data Coverage:");
        let (resp, painter) = ui.allocate_painter(Vec2::new(200.0, 14.0), Sense::hover());
        let steps = 40;
        let w = resp.rect.width() / steps as f32;
        for i in 0..steps {
            let t = i as f64 / (steps - 1) as f64;
            let min = resp.rect.min + Vec2::new(i as f32 * w, 0.0);
            let r = Rect::from_min_size(min, Vec2::new(w + 0.5, resp.rect.height()));
            painter.rect_filled(r, 0.0, rgb(coverage_color(t)));
        }
        ui.label("0% → 100%");
    });
}
