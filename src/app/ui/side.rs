//! Side panel UI: input stage, committed shapes and report actions.

use super::super::SecantApp;
use super::icons;
use crate::geometry::Tangency;
use crate::report;
use crate::session::InputStage;
use crate::util::fixed2;
use egui::{Color32, RichText};

impl SecantApp {
    pub(crate) fn ui_side(&mut self, ui: &mut egui::Ui) {
        ui.heading("Session");
        let stage = self.session.stage();
        let icon = match stage {
            InputStage::AwaitingCircle => icons::ICON_CIRCLE,
            InputStage::AwaitingLine => icons::ICON_SEGMENT,
            InputStage::Complete => icons::ICON_DONE,
        };
        ui.label(RichText::new(format!("{icon} {}", stage.label())).strong());
        ui.label(stage.instruction());
        if self.session.is_dragging() {
            ui.label(
                RichText::new("Release to place the shape.")
                    .small()
                    .color(Color32::from_gray(180)),
            );
        }

        ui.separator();
        ui.heading("Shapes");
        let lines = report::status_lines(&self.session);
        if lines.is_empty() {
            ui.label("Nothing placed yet.");
        }
        for line in lines {
            ui.monospace(line);
        }
        if let Some(Err(err)) = self.session.solution() {
            ui.colored_label(Color32::from_rgb(220, 70, 70), err.to_string());
        }

        ui.separator();
        ui.heading("Report");
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Copy text", icons::ICON_COPY))
                .on_hover_text("Copy the status lines (Ctrl+C)")
                .clicked()
            {
                self.copy_text_report();
            }
            if ui
                .button(format!("{} Copy JSON", icons::ICON_COPY))
                .on_hover_text("Copy a JSON report (Ctrl+Shift+J)")
                .clicked()
            {
                self.copy_json_report();
            }
        });

        ui.separator();
        ui.collapsing("Solver", |ui| {
            let tangency = match self.config.tangency() {
                Tangency::Exact => "exact (D == 0)".to_string(),
                Tangency::Relative(eps) => format!("relative, eps = {eps:e}"),
            };
            ui.label(format!("Tangency: {tangency}"));
            ui.label(format!(
                "Circle outline: {} vertices",
                self.config.outline_segments()
            ));
            if let Some(segment) = self.session.segment() {
                ui.label(format!("Segment length: {}", fixed2(segment.length())));
            }
            for hit in self.session.intersections() {
                ui.monospace(format!(
                    "t = {}  ({}, {})",
                    fixed2(hit.t),
                    fixed2(hit.point.x),
                    fixed2(hit.point.y)
                ));
            }
        });
    }
}
