//! # App Update Loop
//!
//! The per-frame `eframe::App` implementation: prune expired notifications,
//! tick the dashboard refresh timer, handle keyboard shortcuts and render the
//! active tab plus the floating layers (confirm modal, refresh overlay,
//! notification stack).

use eframe::egui;
use std::time::{Duration, Instant};

use crate::ui::app_state::{MainTab, SmartStayApp};
use crate::ui::components::notifications::render_notifications;
use crate::ui::components::theme;

impl eframe::App for SmartStayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::setup_smartstay_style(ctx);

        let now = Instant::now();
        self.notifications.prune(now);

        if self.dashboard.tick(now) {
            // Placeholder: a real deployment would pull fresh dashboard data
            // from the backend here.
            log::info!("Dashboard data refreshed");
        }

        self.handle_keyboard_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();

            match self.current_tab {
                MainTab::Dashboard => self.render_dashboard_tab(ui),
                MainTab::Bookings => self.render_bookings_tab(ui),
                MainTab::NewBooking => self.render_new_booking_tab(ui),
                MainTab::Staff => self.render_staff_tab(ui),
            }
        });

        self.render_confirm_modal(ctx);
        self.render_refresh_overlay(ctx);
        render_notifications(ctx, &mut self.notifications);

        // Keep the frame loop alive while timed state is pending.
        if self.dashboard.is_active() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
        if !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }
}

impl SmartStayApp {
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("SmartStay")
                    .size(24.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.separator();

            let mut clicked: Option<MainTab> = None;
            for tab in MainTab::ALL {
                if ui
                    .selectable_label(self.current_tab == tab, tab.title())
                    .clicked()
                {
                    clicked = Some(tab);
                }
            }
            if let Some(tab) = clicked {
                self.switch_tab(tab);
            }
        });
    }

    /// Ctrl+P triggers print; Escape closes the open confirmation dialog.
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (print_pressed, escape_pressed) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if print_pressed {
            self.trigger_print();
        }
        if escape_pressed {
            self.dismiss_pending_action();
        }
    }
}
