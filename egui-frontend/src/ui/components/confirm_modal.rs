//! # Confirmation Modal
//!
//! Confirmation dialog gating the cancel-booking, process-payment and
//! delete-staff actions. Confirming navigates the browser to the backend URL;
//! Escape or the Cancel button dismisses.

use eframe::egui;

use crate::ui::app_state::SmartStayApp;
use crate::ui::components::theme;

impl SmartStayApp {
    pub fn render_confirm_modal(&mut self, ctx: &egui::Context) {
        let Some(action) = self.pending_action.clone() else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Area::new(egui::Id::new("confirm_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ctx.style())
                            .fill(egui::Color32::WHITE)
                            .rounding(egui::Rounding::same(10.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(360.0, 120.0));
                                ui.set_max_size(egui::vec2(360.0, 160.0));

                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        egui::RichText::new(action.confirm_prompt()).size(16.0),
                                    );
                                    ui.add_space(16.0);

                                    ui.horizontal(|ui| {
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| {
                                                if ui.button("Cancel").clicked() {
                                                    cancelled = true;
                                                }
                                                ui.add_space(8.0);
                                                if ui
                                                    .add(
                                                        egui::Button::new(
                                                            egui::RichText::new("Confirm")
                                                                .color(egui::Color32::WHITE)
                                                                .strong(),
                                                        )
                                                        .fill(theme::ACCENT),
                                                    )
                                                    .clicked()
                                                {
                                                    confirmed = true;
                                                }
                                            },
                                        );
                                    });
                                });
                            });
                    });
                });
            });

        // Handle actions outside the UI closures to avoid borrowing conflicts.
        if confirmed {
            self.confirm_pending_action(ctx);
        }
        if cancelled {
            self.dismiss_pending_action();
        }
    }
}
