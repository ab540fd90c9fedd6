//! Xiangqi sandbox GUI
//!
//! Place enemy pieces, move the rook, and see where it is safe.

use xiangqi::ui::SandboxApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0])
            .with_min_inner_size([760.0, 600.0])
            .with_title("Xiangqi Rook Sandbox"),
        ..Default::default()
    };

    eframe::run_native(
        "Xiangqi Sandbox",
        options,
        Box::new(|cc| Ok(Box::new(SandboxApp::new(cc)))),
    )
}
