use eframe::egui;

use tonegen::ToneGenerator;

/// Minimal control surface: a frequency slider and a play/stop toggle.
///
/// Owns its own display state; the engine is reached only through the
/// generator's public calls.
pub struct ToneUi {
    generator: ToneGenerator,
    frequency: f64,
    is_playing: bool,
}

impl ToneUi {
    pub fn new(generator: ToneGenerator) -> Self {
        let frequency = 880.0;
        generator.set_frequency(frequency);
        Self {
            generator,
            frequency,
            is_playing: false,
        }
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("Tone Generator");
                ui.add_space(10.0);
                self.draw_controls(ui);
            });
        });
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Frequency: {:.2} Hz", self.frequency));
        if ui
            .add(egui::Slider::new(&mut self.frequency, 40.0..=4000.0))
            .changed()
        {
            self.generator.set_frequency(self.frequency);
        }

        ui.add_space(10.0);
        let label = if self.is_playing { "Stop" } else { "Play" };
        if ui.button(label).clicked() {
            self.toggle_playback();
        }
    }

    fn toggle_playback(&mut self) {
        if self.is_playing {
            if let Err(err) = self.generator.stop() {
                eprintln!("failed to stop playback: {}", err);
            }
            self.is_playing = false;
        } else {
            match self.generator.play() {
                Ok(()) => self.is_playing = true,
                Err(err) => eprintln!("failed to start playback: {}", err),
            }
        }
    }

    pub fn shutdown(&mut self) {
        if let Err(err) = self.generator.stop() {
            eprintln!("failed to stop playback on exit: {}", err);
        }
    }
}
