use super::super::SecantApp;
use super::icons;

impl SecantApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use egui's built-in theme toggle so icon matches current mode.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            self.ui_report_menu(ui);
            ui.separator();

            let side_label = if self.side_open {
                "Hide side"
            } else {
                "Show side"
            };
            if ui
                .add(
                    egui::Button::new(format!("{} {side_label}", icons::ICON_SIDE_TOGGLE))
                        .shortcut_text("Ctrl+B"),
                )
                .clicked()
            {
                self.side_open = !self.side_open;
            }
        });
    }

    fn ui_report_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button(format!("{} Report", icons::ICON_MENU), |ui| {
            if ui
                .add(egui::Button::new("Copy as text").shortcut_text("Ctrl+C"))
                .clicked()
            {
                self.copy_text_report();
                ui.close();
            }
            if ui
                .add(egui::Button::new("Copy as JSON").shortcut_text("Ctrl+Shift+J"))
                .clicked()
            {
                self.copy_json_report();
                ui.close();
            }
        });
    }
}
