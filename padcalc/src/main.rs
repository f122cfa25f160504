//! padcalc - a keypad calculator
//!
//! Builds an arithmetic expression from button presses and hands it to
//! `num_parser` for evaluation.

mod accumulator;
mod app;
mod config;
mod evaluator;
mod keypad;

use app::PadCalcApp;
use config::CalcConfig;
use eframe::NativeOptions;
use tracing::info;

fn main() -> eframe::Result<()> {
    padcore::logging::init("padcalc=info,padcore=info");

    let config = CalcConfig::load();
    info!(
        width = config.window_width,
        height = config.window_height,
        "starting calculator"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(config.resizable)
            .with_title("Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Calculator",
        options,
        Box::new(move |cc| {
            padcore::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(PadCalcApp::new(cc, config))
        }),
    )
}
