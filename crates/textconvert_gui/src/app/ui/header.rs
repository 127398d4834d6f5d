//! Top bar with pane titles and the sync direction.

use super::super::*;
use eframe::egui;

impl TextConvertApp {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let converter = self.engine.converter();
        let arrow = super::direction_arrow(converter);
        let hover = if converter.is_linked() {
            "Edits flow in the direction of the arrow."
        } else {
            "The panes are independent editors."
        };
        egui::TopBottomPanel::top("header")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(converter.title(Side::First));
                    ui.label(egui::RichText::new(arrow).heading().color(COLOR_ACCENT))
                        .on_hover_text(hover);
                    ui.heading(converter.title(Side::Second));
                });
            });
    }
}
