//! # New Booking Form
//!
//! Renders the new-booking form: guest details, the date pair with the
//! checkout-after-checkin constraint, the availability-check placeholder and
//! the derived total.

use eframe::egui;
use std::time::{Duration, Instant};

use crate::ui::app_state::SmartStayApp;
use crate::ui::components::form_fields::render_form_field;
use crate::ui::components::theme;
use crate::ui::format::format_currency;
use crate::ui::state::{NotificationLevel, FIELD_CHECK_IN, FIELD_CHECK_OUT, FIELD_GUEST_EMAIL, FIELD_GUEST_NAME};

impl SmartStayApp {
    pub fn render_new_booking_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("New Booking");
        ui.add_space(8.0);

        let _ = render_form_field(ui, &mut self.booking_form.form.fields[FIELD_GUEST_NAME]);
        let _ = render_form_field(ui, &mut self.booking_form.form.fields[FIELD_GUEST_EMAIL]);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Room").strong());
                ui.add(
                    egui::TextEdit::singleline(&mut self.booking_form.room_number)
                        .hint_text("e.g. 204")
                        .desired_width(100.0),
                );
            });
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Price per night").strong());
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.booking_form.price_per_night)
                        .hint_text("e.g. 120.00")
                        .desired_width(100.0),
                );
                if response.changed() {
                    self.booking_form.price_changed();
                }
            });
        });

        ui.add_space(4.0);

        let check_in_response =
            render_form_field(ui, &mut self.booking_form.form.fields[FIELD_CHECK_IN]);
        if check_in_response.changed() {
            self.booking_form.check_in_changed();
        }
        ui.label(
            egui::RichText::new(format!("Earliest check-in: {}", self.booking_form.min_check_in))
                .small()
                .color(egui::Color32::GRAY),
        );

        let check_out_response =
            render_form_field(ui, &mut self.booking_form.form.fields[FIELD_CHECK_OUT]);
        if check_out_response.changed() {
            self.booking_form.check_out_changed();
        }
        ui.label(
            egui::RichText::new(format!(
                "Earliest check-out: {}",
                self.booking_form.min_check_out
            ))
            .small()
            .color(egui::Color32::GRAY),
        );

        ui.add_space(8.0);

        // Derived total, blank unless nights > 0 and a price is present.
        if let Some(total) = self.booking_form.total {
            ui.label(
                egui::RichText::new(format!("Total: {}", format_currency(total)))
                    .size(18.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(8.0);
        }

        self.render_availability_check(ui);

        ui.add_space(8.0);

        if ui
            .add(egui::Button::new(egui::RichText::new("Create booking").strong()).fill(theme::ACCENT))
            .clicked()
        {
            self.submit_booking();
        }
    }

    /// "Check availability" placeholder: spins for its fixed delay, then
    /// reports the room as available.
    fn render_availability_check(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        if let Some(available) = self.booking_form.poll_availability(now) {
            let message = if available {
                "Room is available for the selected dates"
            } else {
                "Room is not available for the selected dates"
            };
            let level = if available {
                NotificationLevel::Success
            } else {
                NotificationLevel::Warning
            };
            self.notifications.push(message, level);
        }

        ui.horizontal(|ui| {
            let checking = self.booking_form.availability.is_some();
            if ui
                .add_enabled(!checking, egui::Button::new("Check availability"))
                .clicked()
            {
                self.booking_form.start_availability_check(now);
            }
            if checking {
                ui.spinner();
                ui.ctx().request_repaint_after(Duration::from_millis(100));
            }
        });
    }
}
