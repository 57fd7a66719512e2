//! # Notification Stack
//!
//! Renders the toast notifications anchored top-right. Each toast carries a
//! manual dismiss button; expiry itself is handled by
//! [`NotificationState::prune`](crate::ui::state::NotificationState::prune)
//! in the update loop.

use eframe::egui;

use crate::ui::components::theme;
use crate::ui::state::NotificationState;

pub fn render_notifications(ctx: &egui::Context, notifications: &mut NotificationState) {
    if notifications.is_empty() {
        return;
    }

    let mut dismissed: Option<usize> = None;

    egui::Area::new(egui::Id::new("notification_stack"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            for (index, notification) in notifications.iter().enumerate() {
                egui::Frame::none()
                    .fill(theme::level_color(notification.level))
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&notification.message)
                                    .color(egui::Color32::WHITE),
                            );
                            if ui.small_button("✖").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        notifications.dismiss(index);
    }
}
