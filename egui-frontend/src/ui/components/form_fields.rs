//! Shared rendering for form fields and status badges.

use eframe::egui;

use crate::ui::state::{FieldKind, FormField};

/// Render a labelled single-line input with its inline error, returning the
/// text-edit response so callers can react to changes.
pub fn render_form_field(ui: &mut egui::Ui, field: &mut FormField) -> egui::Response {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(field.label)
                .strong()
                .color(egui::Color32::from_rgb(60, 60, 60)),
        );

        let hint = match field.kind {
            FieldKind::Date => "YYYY-MM-DD",
            FieldKind::Email => "name@example.com",
            FieldKind::Text | FieldKind::Password => "",
        };
        let mut text_edit = egui::TextEdit::singleline(&mut field.value)
            .hint_text(hint)
            .desired_width(280.0);
        if field.kind == FieldKind::Password {
            text_edit = text_edit.password(true);
        }
        let response = ui.add(text_edit);

        if let Some(error) = &field.error {
            ui.colored_label(egui::Color32::from_rgb(200, 0, 0), error);
        }

        response
    })
    .inner
}

/// Small colored badge, white text on a status color.
pub fn render_badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(text)
            .color(egui::Color32::WHITE)
            .background_color(color),
    );
}
