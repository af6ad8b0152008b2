//! Caro GUI
//!
//! Play five in a row against the engine or another player.
//! Set `RUST_LOG=caro=debug` to see the engine's decisions.

use caro::ui::CaroApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Caro"),
        ..Default::default()
    };

    eframe::run_native("Caro", options, Box::new(|cc| Ok(Box::new(CaroApp::new(cc)))))
}
