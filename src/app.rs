use std::time::Duration;

use eframe::egui;
use rfd::FileDialog;

use crate::controller::FormController;
use crate::models::{ControllerState, Message};
use crate::ui;

const RUNNING_REPAINT: Duration = Duration::from_millis(100);

pub struct YtdlApp {
    controller: FormController,
    message: Option<Message>,
}

impl YtdlApp {
    pub fn new(controller: FormController) -> Self {
        Self {
            controller,
            message: None,
        }
    }

    fn submit(&mut self) {
        let title = self.controller.localizer().get("choose-folder");
        let message = self.controller.submit(|start| {
            FileDialog::new()
                .set_title(&title)
                .set_directory(start)
                .pick_folder()
        });
        if message.is_some() {
            self.message = message;
        }
    }
}

impl eframe::App for YtdlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(message) = self.controller.poll() {
            self.message = Some(message);
        }

        let running = self.controller.state() == ControllerState::Running;
        if running {
            // Keep polling the worker even when the user is idle.
            ctx.request_repaint_after(RUNNING_REPAINT);
        }

        let mut clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let (form, l) = self.controller.form_mut();
            ui.heading(l.get("app-title"));
            ui.add_space(12.0);

            // Blocked while a message is up.
            ui.add_enabled_ui(self.message.is_none(), |ui| {
                let response = ui::render_source_input(ui, form, l);
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(8.0);
                ui::render_options(ui, form, l);
                ui.add_space(12.0);
                let pressed = ui::render_download_button(ui, !running, l);
                ui::render_status(ui, running, l);
                clicked = pressed || (entered && !running);
            });
        });

        if clicked {
            self.submit();
        }

        if let Some(message) = &self.message {
            if ui::render_message(ctx, message, self.controller.localizer()) {
                self.message = None;
            }
        }
    }
}
