mod ui;

use anyhow::Result;
use tonegen::ToneGenerator;
use ui::ToneUi;

struct ToneApp {
    ui: ToneUi,
}

impl eframe::App for ToneApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.ui.update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.ui.shutdown();
    }
}

fn main() -> Result<()> {
    let generator = ToneGenerator::new();

    let options = eframe::NativeOptions {
        initial_window_size: Some(eframe::egui::Vec2::new(350.0, 140.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Tone Generator",
        options,
        Box::new(|_cc| {
            Box::new(ToneApp {
                ui: ToneUi::new(generator),
            })
        }),
    )
    .map_err(|err| anyhow::anyhow!("{}", err))?;

    Ok(())
}
