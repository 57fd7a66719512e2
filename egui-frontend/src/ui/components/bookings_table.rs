//! # Bookings Table
//!
//! The all-bookings view: search box, CSV export and print triggers, and a
//! table with status badges and per-row cancel/pay actions.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{BackendAction, PaymentStatus};

use crate::ui::app_state::SmartStayApp;
use crate::ui::components::form_fields::render_badge;
use crate::ui::components::theme;
use crate::ui::format::{format_currency, format_date};

impl SmartStayApp {
    pub fn render_bookings_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Bookings");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search bookings")
                    .desired_width(220.0),
            );
            if ui.button("Export CSV").clicked() {
                self.export_bookings();
            }
            if ui.button("Print").clicked() {
                self.trigger_print();
            }
        });

        ui.add_space(8.0);

        let indices = self.filtered_booking_indices();
        if indices.is_empty() {
            ui.label("No bookings match your search.");
            return;
        }

        let mut requested: Option<BackendAction> = None;

        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(60.0), 8)
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for title in [
                    "Booking", "Guest", "Room", "Check-in", "Check-out", "Total", "Status",
                    "Payment", "Actions",
                ] {
                    header.col(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for &index in &indices {
                    let booking = &self.bookings[index];
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&booking.id);
                        });
                        row.col(|ui| {
                            ui.label(&booking.guest_name)
                                .on_hover_text(&booking.guest_email);
                        });
                        row.col(|ui| {
                            ui.label(&booking.room_number);
                        });
                        row.col(|ui| {
                            ui.label(format_date(&booking.check_in));
                        });
                        row.col(|ui| {
                            ui.label(format_date(&booking.check_out));
                        });
                        row.col(|ui| {
                            ui.label(format_currency(booking.total_amount));
                        });
                        row.col(|ui| {
                            render_badge(ui, &booking.status.to_string(), theme::status_color(booking.status));
                        });
                        row.col(|ui| {
                            render_badge(
                                ui,
                                &booking.payment.to_string(),
                                theme::payment_color(booking.payment),
                            );
                        });
                        row.col(|ui| {
                            ui.horizontal(|ui| {
                                if ui.small_button("Cancel").clicked() {
                                    requested =
                                        Some(BackendAction::CancelBooking(booking.id.clone()));
                                }
                                if booking.payment == PaymentStatus::Unpaid
                                    && ui.small_button("Pay").clicked()
                                {
                                    requested =
                                        Some(BackendAction::ProcessPayment(booking.id.clone()));
                                }
                            });
                        });
                    });
                }
            });

        if let Some(action) = requested {
            self.request_action(action);
        }
    }
}
