use serde::{Deserialize, Serialize};
use std::fmt;

/// A hotel booking as displayed in the bookings table.
///
/// Dates are kept as `YYYY-MM-DD` strings because that is the shape they have
/// in form inputs and in the exported CSV; date math parses them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub room_number: String,
    /// Check-in date, `YYYY-MM-DD`
    pub check_in: String,
    /// Check-out date, `YYYY-MM-DD`
    pub check_out: String,
    pub price_per_night: f64,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub payment: PaymentStatus,
}

/// Booking lifecycle status shown as a colored badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Payment status shown alongside the booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
        };
        write!(f, "{}", s)
    }
}

/// A staff member row in the manage-staff view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Admin,
    Receptionist,
    Staff,
}

impl StaffRole {
    pub const ALL: [StaffRole; 3] = [StaffRole::Admin, StaffRole::Receptionist, StaffRole::Staff];
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaffRole::Admin => "Admin",
            StaffRole::Receptionist => "Receptionist",
            StaffRole::Staff => "Staff",
        };
        write!(f, "{}", s)
    }
}

/// Backend actions reachable from the UI.
///
/// These are the only points of contact with the server: each action maps to a
/// fixed URL template and is triggered by navigating the browser there after
/// user confirmation. The id is never inspected locally, only spliced into the
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendAction {
    CancelBooking(String),
    ProcessPayment(String),
    DeleteStaff(String),
}

impl BackendAction {
    /// Path component of the action URL, e.g. `/cancel_booking/42`.
    pub fn path(&self) -> String {
        match self {
            BackendAction::CancelBooking(id) => format!("/cancel_booking/{}", id),
            BackendAction::ProcessPayment(id) => format!("/process_payment/{}", id),
            BackendAction::DeleteStaff(id) => format!("/delete_staff/{}", id),
        }
    }

    /// Full URL against the configured backend base.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Confirmation prompt shown before the action fires.
    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            BackendAction::CancelBooking(_) => "Are you sure you want to cancel this booking?",
            BackendAction::ProcessPayment(_) => "Process payment for this booking?",
            BackendAction::DeleteStaff(_) => "Are you sure you want to delete this staff member?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_paths() {
        assert_eq!(
            BackendAction::CancelBooking("42".to_string()).path(),
            "/cancel_booking/42"
        );
        assert_eq!(
            BackendAction::ProcessPayment("7".to_string()).path(),
            "/process_payment/7"
        );
        assert_eq!(
            BackendAction::DeleteStaff("3".to_string()).path(),
            "/delete_staff/3"
        );
    }

    #[test]
    fn test_action_url_joins_base_without_double_slash() {
        let action = BackendAction::CancelBooking("42".to_string());
        assert_eq!(
            action.url("http://localhost:5000"),
            "http://localhost:5000/cancel_booking/42"
        );
        assert_eq!(
            action.url("http://localhost:5000/"),
            "http://localhost:5000/cancel_booking/42"
        );
    }

    #[test]
    fn test_status_display_strings() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "Confirmed");
        assert_eq!(BookingStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!(PaymentStatus::Unpaid.to_string(), "Unpaid");
        assert_eq!(StaffRole::Receptionist.to_string(), "Receptionist");
    }
}
