//! Main egui/eframe application state and UI orchestration.

use crate::config::AppConfig;
use crate::session::InteractionSession;
use egui::{Context, Event, Key};

mod clipboard;
mod ui;

pub struct SecantApp {
    session: InteractionSession,
    config: AppConfig,
    last_status: Option<String>,
    side_open: bool,
}

impl SecantApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: InteractionSession::new(config.tangency()),
            config,
            last_status: None,
            side_open: true,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.last_status = Some(msg.into());
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        // Ctrl/Cmd + B: toggle side panel
        if ctx.input(|i| i.key_pressed(Key::B) && i.modifiers.command) {
            self.side_open = !self.side_open;
        }
        // Ctrl/Cmd + C arrives as a copy event rather than a key press
        if ctx.input(|i| i.events.iter().any(|e| matches!(e, Event::Copy))) {
            self.copy_text_report();
        }
        // Ctrl/Cmd + Shift + J: copy JSON report
        if ctx.input(|i| i.key_pressed(Key::J) && i.modifiers.command && i.modifiers.shift) {
            self.copy_json_report();
        }
    }
}

impl eframe::App for SecantApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::SidePanel::right("side")
            .resizable(true)
            .default_width(300.0)
            .show_animated(ctx, self.side_open, |ui| self.ui_side(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_canvas(ui));
    }
}
