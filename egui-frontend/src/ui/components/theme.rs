//! # Theme Module
//!
//! Colors and global style for the SmartStay frontend.
//!
//! ## Responsibilities:
//! - One-call style setup applied every frame
//! - Badge colors for booking/payment status (the web app's
//!   `bg-success`/`bg-warning`/`bg-danger` classes)
//! - Notification colors per severity level

use eframe::egui;
use shared::{BookingStatus, PaymentStatus};

use crate::ui::state::NotificationLevel;

/// Steel-blue accent used for headers and primary buttons.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(70, 130, 180);

pub const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
pub const WARNING_AMBER: egui::Color32 = egui::Color32::from_rgb(217, 150, 14);
pub const DANGER_RED: egui::Color32 = egui::Color32::from_rgb(198, 40, 40);

/// Apply the SmartStay look: light visuals, roomier spacing, and a subtle
/// hover expansion on buttons (the web app's hover lift).
pub fn setup_smartstay_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.visuals = egui::Visuals::light();
    style.visuals.widgets.hovered.expansion = 2.0;
    ctx.set_style(style);
}

/// Badge color for a booking status.
pub fn status_color(status: BookingStatus) -> egui::Color32 {
    match status {
        BookingStatus::Confirmed => SUCCESS_GREEN,
        BookingStatus::Pending => WARNING_AMBER,
        BookingStatus::Cancelled => DANGER_RED,
    }
}

/// Badge color for a payment status.
pub fn payment_color(payment: PaymentStatus) -> egui::Color32 {
    match payment {
        PaymentStatus::Paid => SUCCESS_GREEN,
        PaymentStatus::Unpaid => WARNING_AMBER,
    }
}

/// Background color for a notification of the given severity.
pub fn level_color(level: NotificationLevel) -> egui::Color32 {
    match level {
        NotificationLevel::Info => ACCENT,
        NotificationLevel::Success => SUCCESS_GREEN,
        NotificationLevel::Warning => WARNING_AMBER,
        NotificationLevel::Danger => DANGER_RED,
    }
}
