use std::path::PathBuf;

use idiom_match::QuizApp;
use idiom_match::ui::install_cjk_fonts;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    // Optional first argument: path to an external CSV question bank.
    let bank_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("成語配對遊戲")
            .with_inner_size([900.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "成語配對遊戲",
        options,
        Box::new(move |cc| {
            install_cjk_fonts(&cc.egui_ctx);
            Ok(Box::new(QuizApp::with_source(bank_path.as_deref())))
        }),
    )
}
