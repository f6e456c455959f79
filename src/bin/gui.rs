// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use disaster_dash::{
    config::{consts::SETTINGS_FILE, settings::Settings, state::GuiState},
    gui, log,
};
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

/// 64×64 map-pin style icon: cyan disc on a slate square.
fn app_icon() -> IconData {
    const N: u32 = 64;
    let img = RgbaImage::from_fn(N, N, |x, y| {
        let (cx, cy) = (x as f32 - 31.5, y as f32 - 27.0);
        let d = (cx * cx + cy * cy).sqrt();
        if d < 10.0 {
            Rgba([0x0f, 0x17, 0x2a, 0xff])
        } else if d < 22.0 || (y > 40 && y < 60 && cx.abs() < (60.0 - y as f32) * 0.55) {
            Rgba([0x06, 0xb6, 0xd4, 0xff])
        } else {
            Rgba([0x33, 0x41, 0x55, 0xff])
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let settings = match Settings::load(Path::new(SETTINGS_FILE)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}; using default settings");
            Settings::default()
        }
    };
    log::init(settings.log_file.as_deref());

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, settings) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
