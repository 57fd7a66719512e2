//! # Dashboard View
//!
//! Metric cards with the staggered fade-in the web app did in CSS, and the
//! full-screen loading overlay shown around each periodic refresh.

use eframe::egui;

use crate::ui::app_state::SmartStayApp;
use crate::ui::components::theme;
use crate::ui::format::format_currency;
use crate::ui::state::DashboardMetrics;

const CARD_FADE_SECS: f32 = 0.5;
const CARD_STAGGER_SECS: f32 = 0.1;

impl SmartStayApp {
    pub fn render_dashboard_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dashboard");
        ui.label(
            egui::RichText::new("Data refreshes every 30 seconds while this tab is open.")
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.add_space(12.0);

        let metrics = DashboardMetrics::compute(&self.bookings);
        let cards = [
            ("Total bookings", metrics.total_bookings.to_string()),
            ("Pending", metrics.pending_bookings.to_string()),
            ("Cancelled", metrics.cancelled_bookings.to_string()),
            ("Revenue", format_currency(metrics.revenue)),
        ];

        let elapsed = self.tab_opened_at.elapsed().as_secs_f32();

        ui.horizontal(|ui| {
            for (index, (label, value)) in cards.iter().enumerate() {
                let fade_start = index as f32 * CARD_STAGGER_SECS;
                let opacity = ((elapsed - fade_start) / CARD_FADE_SECS).clamp(0.0, 1.0);
                ui.scope(|ui| {
                    ui.set_opacity(opacity);
                    render_metric_card(ui, label, value);
                });
            }
        });

        // Keep repainting until the last card has faded in.
        let animation_end = (cards.len() - 1) as f32 * CARD_STAGGER_SECS + CARD_FADE_SECS;
        if elapsed < animation_end {
            ui.ctx().request_repaint();
        }
    }

    /// Full-screen overlay shown for one second around each dashboard refresh.
    pub fn render_refresh_overlay(&self, ctx: &egui::Context) {
        if !self.dashboard.overlay_visible() {
            return;
        }

        egui::Area::new(egui::Id::new("refresh_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
                );
                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                });
            });
    }
}

fn render_metric_card(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.group(|ui| {
        ui.set_min_size(egui::vec2(150.0, 80.0));
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(value)
                    .size(26.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.label(egui::RichText::new(label).color(egui::Color32::GRAY));
            ui.add_space(8.0);
        });
    });
}
