//! Connect Four GUI
//!
//! Play against the engine: click a column (or hover it and press Space) to
//! drop a stone. N starts a new game, Escape quits. Set `RUST_LOG=debug` to
//! see every search pass.

use connect_four::ui::ConnectFourApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 800.0])
            .with_min_inner_size([400.0, 400.0])
            .with_title("ConnectFour"),
        ..Default::default()
    };

    eframe::run_native(
        "ConnectFour",
        options,
        Box::new(|cc| Ok(Box::new(ConnectFourApp::new(cc)))),
    )
}
