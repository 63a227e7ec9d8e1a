// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use candidate_sentiment::{cli, gui};
use eframe::egui::{ IconData, ViewportBuilder };

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    // Same flags as the CLI (--real, --candidate, --from, ...)
    let params = match cli::parse_args(std::env::args().skip(1)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Bad arguments: {}", e);
            std::process::exit(2);
        }
    };

    let mut viewport = ViewportBuilder::default().with_inner_size([1100.0, 720.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, params.pipeline) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
