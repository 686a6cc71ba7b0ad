use super::super::SecantApp;
use egui::{Color32, RichText};

impl SecantApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        let placed = usize::from(self.session.circle().is_some())
            + usize::from(self.session.segment().is_some());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Shapes: {placed}/2"))
                    .small()
                    .color(Color32::from_gray(180)),
            );
            if let Some(msg) = &self.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }
}
