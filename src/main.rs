use eframe::egui;

mod app;
mod config;
mod content;
mod io;
mod state;
mod style;
mod view;

use app::Folio;
use config::Config;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([720.0, 480.0])
            .with_title(content::PROFILE.name),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(|cc| Ok(Box::new(Folio::new(cc, config)))),
    )
}
