//! Bottom status bar with the latest notice and per-pane sync state.

use super::super::*;
use eframe::egui;

impl TextConvertApp {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        let color = if status.is_error {
                            COLOR_ERROR
                        } else {
                            egui::Color32::YELLOW
                        };
                        ui.label(egui::RichText::new(&status.text).color(color));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for side in Side::BOTH.into_iter().rev() {
                            let pane = self.engine.pane(side);
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}: {} chars",
                                    pane.title(),
                                    pane.buffer().char_len()
                                ))
                                .small()
                                .color(COLOR_TEXT_MUTED),
                            );
                        }
                        if self.composing {
                            ui.label(
                                egui::RichText::new("composing")
                                    .small()
                                    .color(COLOR_TEXT_SECONDARY),
                            );
                        }
                    });
                });
            });
    }
}
