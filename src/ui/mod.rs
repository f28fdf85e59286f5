use eframe::egui::{self, Stroke};

use crate::localizations::Localizations;
use crate::models::{FormState, Message, MessageKind};
use crate::theme::*;

fn text_input(ui: &mut egui::Ui, value: &mut String, hint: String) -> egui::Response {
    egui::Frame::group(ui.style())
        .fill(INPUT_FILL)
        .stroke(Stroke::new(1.0, INPUT_STROKE))
        .rounding(ROUNDING_FRAME)
        .show(ui, |ui| {
            ui.add_sized(
                [ui.available_width(), INPUT_HEIGHT],
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .font(egui::FontId::proportional(15.0)),
            )
        })
        .inner
}

pub fn render_source_input(ui: &mut egui::Ui, form: &mut FormState, l: &Localizations) -> egui::Response {
    ui.label(l.get("source-label"));
    text_input(ui, &mut form.source, l.get("source-placeholder"))
}

pub fn render_options(ui: &mut egui::Ui, form: &mut FormState, l: &Localizations) {
    text_input(ui, &mut form.filename, l.get("filename-placeholder"));
    ui.add_space(4.0);
    text_input(ui, &mut form.format, l.get("format-placeholder"));
    ui.add_space(4.0);
    ui.checkbox(&mut form.audio_only, l.get("audio-only"));
}

/// Returns true when clicked.
pub fn render_download_button(ui: &mut egui::Ui, enabled: bool, l: &Localizations) -> bool {
    let button = egui::Button::new(
        egui::RichText::new(l.get("download-button"))
            .size(BUTTON_FONT_SIZE)
            .color(BUTTON_MAIN_TEXT),
    )
    .min_size(MIN_SIZE_BUTTON)
    .fill(PRIMARY_BUTTON_BG)
    .rounding(ROUNDING_BUTTON)
    .stroke(Stroke::new(1.0, BORDER_COLOR));

    ui.add_enabled(enabled, button).clicked()
}

pub fn render_status(ui: &mut egui::Ui, running: bool, l: &Localizations) {
    if running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new(l.get("status-downloading")).color(SECONDARY_TEXT));
        });
    }
}

/// Draws the pending message centered over the form. Returns true once
/// the user acknowledges it.
pub fn render_message(ctx: &egui::Context, message: &Message, l: &Localizations) -> bool {
    let mut acknowledged = false;

    egui::Window::new(message.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let body = egui::RichText::new(&message.body);
            let body = match message.kind {
                MessageKind::Error => body.color(TEXT_ERROR),
                MessageKind::Info => body,
            };
            ui.label(body);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(l.get("ok-button")).clicked() {
                    acknowledged = true;
                }
            });
        });

    acknowledged
}
