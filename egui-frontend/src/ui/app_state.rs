//! # App State Module
//!
//! Central application state for the SmartStay desktop frontend.
//!
//! ## Key Types:
//! - `MainTab` - the four top-level views (Dashboard, Bookings, New Booking, Staff)
//! - `SmartStayApp` - single application state struct
//!
//! ## Purpose:
//! The web app kept all of this as ambient DOM state; here it lives in one
//! struct passed to every render method: the booking list, form states, the
//! notification stack, the dashboard refresh timer and the pending
//! confirmation dialog.

use chrono::Local;
use eframe::egui;
use log::info;
use shared::{BackendAction, Booking, BookingStatus, PaymentStatus, StaffMember, StaffRole};
use std::time::Instant;

use crate::ui::export;
use crate::ui::format;
use crate::ui::state::{
    BookingFormState, DashboardState, FieldKind, FormField, FormState, NotificationLevel,
    NotificationState, FIELD_GUEST_EMAIL, FIELD_GUEST_NAME,
};

/// Backend the action URLs navigate to (the Flask dev server by default).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

// Field order inside the add-staff form.
pub const STAFF_FIELD_NAME: usize = 0;
pub const STAFF_FIELD_EMAIL: usize = 1;
pub const STAFF_FIELD_PASSWORD: usize = 2;

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Bookings,
    NewBooking,
    Staff,
}

impl MainTab {
    pub const ALL: [MainTab; 4] = [
        MainTab::Dashboard,
        MainTab::Bookings,
        MainTab::NewBooking,
        MainTab::Staff,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Bookings => "Bookings",
            MainTab::NewBooking => "New Booking",
            MainTab::Staff => "Staff",
        }
    }
}

/// Main application struct for the egui SmartStay frontend
pub struct SmartStayApp {
    pub base_url: String,

    // Application data (in-memory; the dashboard "fetch" is a placeholder)
    pub bookings: Vec<Booking>,
    pub staff: Vec<StaffMember>,

    // UI state
    pub current_tab: MainTab,
    pub tab_opened_at: Instant,
    pub search_query: String,
    pub pending_action: Option<BackendAction>,

    // Component state
    pub booking_form: BookingFormState,
    pub staff_form: FormState,
    pub staff_role: StaffRole,
    pub notifications: NotificationState,
    pub dashboard: DashboardState,
}

impl SmartStayApp {
    /// Create the app with seeded demo data and the dashboard tab active.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("🏨 Initializing SmartStayApp");

        let base_url =
            std::env::var("SMARTSTAY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        info!("Backend base URL: {}", base_url);

        let now = Instant::now();
        let today = Local::now().date_naive();

        let mut dashboard = DashboardState::default();
        dashboard.enter(now);

        Self {
            base_url,
            bookings: sample_bookings(),
            staff: sample_staff(),
            current_tab: MainTab::Dashboard,
            tab_opened_at: now,
            search_query: String::new(),
            pending_action: None,
            booking_form: BookingFormState::new(today),
            staff_form: staff_form(),
            staff_role: StaffRole::Receptionist,
            notifications: NotificationState::default(),
            dashboard,
        }
    }

    /// Switch the active tab, tearing down the dashboard refresh timer when
    /// the dashboard is left.
    pub fn switch_tab(&mut self, tab: MainTab) {
        if tab == self.current_tab {
            return;
        }
        let now = Instant::now();
        if self.current_tab == MainTab::Dashboard {
            self.dashboard.leave();
        }
        self.current_tab = tab;
        self.tab_opened_at = now;
        if tab == MainTab::Dashboard {
            self.dashboard.enter(now);
        }
        info!("📑 Switched to {} tab", tab.title());
    }

    /// Indices of bookings matching the current search query, in list order.
    pub fn filtered_booking_indices(&self) -> Vec<usize> {
        self.bookings
            .iter()
            .enumerate()
            .filter(|(_, b)| booking_matches(b, &self.search_query))
            .map(|(i, _)| i)
            .collect()
    }

    /// Validate and submit the new-booking form; on success the booking is
    /// appended to the list and the form resets.
    pub fn submit_booking(&mut self) {
        if !self.booking_form.validate() {
            info!(
                "Booking form blocked with {} field error(s)",
                self.booking_form.form.error_count()
            );
            return;
        }

        self.booking_form.recompute_total();
        let form = &self.booking_form;
        let booking = Booking {
            id: format!("B-{}", 1000 + self.bookings.len() + 1),
            guest_name: form.form.value(FIELD_GUEST_NAME).trim().to_string(),
            guest_email: form.form.value(FIELD_GUEST_EMAIL).trim().to_string(),
            room_number: form.room_number.trim().to_string(),
            check_in: form.check_in().to_string(),
            check_out: form.check_out().to_string(),
            price_per_night: form.price(),
            total_amount: form.total.unwrap_or(0.0),
            status: BookingStatus::Pending,
            payment: PaymentStatus::Unpaid,
        };
        info!("✅ Created booking {} for {}", booking.id, booking.guest_name);
        self.notifications.push(
            format!("Booking created for {}", booking.guest_name),
            NotificationLevel::Success,
        );
        self.bookings.push(booking);
        self.booking_form.clear(Local::now().date_naive());
    }

    /// Validate and submit the add-staff form.
    pub fn submit_staff(&mut self) {
        if !self.staff_form.validate() {
            info!(
                "Staff form blocked with {} field error(s)",
                self.staff_form.error_count()
            );
            return;
        }

        let member = StaffMember {
            id: format!("S-{}", 100 + self.staff.len() + 1),
            name: self.staff_form.value(STAFF_FIELD_NAME).trim().to_string(),
            email: self.staff_form.value(STAFF_FIELD_EMAIL).trim().to_string(),
            role: self.staff_role,
        };
        info!("✅ Added staff member {} ({})", member.name, member.role);
        self.notifications.push(
            format!("Staff member {} added", member.name),
            NotificationLevel::Success,
        );
        self.staff.push(member);
        self.staff_form.clear();
        self.staff_role = StaffRole::Receptionist;
    }

    /// Queue a backend action behind its confirmation dialog.
    pub fn request_action(&mut self, action: BackendAction) {
        info!("Requested action {}", action.path());
        self.pending_action = Some(action);
    }

    /// Confirm the pending action: navigate the system browser to the backend
    /// URL. No optimistic UI and no rollback; the backend owns the outcome.
    pub fn confirm_pending_action(&mut self, ctx: &egui::Context) {
        if let Some(action) = self.pending_action.take() {
            let url = action.url(&self.base_url);
            info!("Navigating to {}", url);
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
    }

    pub fn dismiss_pending_action(&mut self) {
        if self.pending_action.take().is_some() {
            info!("Pending action dismissed");
        }
    }

    /// Export the currently visible (filtered) bookings as CSV to the default
    /// export directory.
    pub fn export_bookings(&mut self) {
        let visible: Vec<Booking> = self
            .filtered_booking_indices()
            .into_iter()
            .map(|i| self.bookings[i].clone())
            .collect();
        let today = Local::now().date_naive();

        let result = export::default_export_dir()
            .ok_or(export::ExportError::NoExportDir)
            .and_then(|dir| export::export_to_file(&visible, &dir, today));

        match result {
            Ok(path) => self.notifications.push(
                format!("Exported {} bookings to {}", visible.len(), path.display()),
                NotificationLevel::Success,
            ),
            Err(e) => self.report_unexpected_error("booking export", e.into()),
        }
    }

    /// Print trigger placeholder; the web app called the opaque
    /// `window.print()`.
    pub fn trigger_print(&mut self) {
        info!("Print requested for {} tab", self.current_tab.title());
        self.notifications
            .push("Preparing print view...", NotificationLevel::Info);
    }

    /// Single funnel for unexpected failures: log the detail, show a generic
    /// danger notification with no diagnostics.
    pub fn report_unexpected_error(&mut self, context: &str, err: anyhow::Error) {
        log::error!("🚨 Unexpected error in {}: {:#}", context, err);
        self.notifications.push(
            "An unexpected error occurred. Please try again.",
            NotificationLevel::Danger,
        );
    }
}

fn staff_form() -> FormState {
    FormState::new(vec![
        FormField::required("Name", FieldKind::Text),
        FormField::required("Email", FieldKind::Email),
        FormField::required("Password", FieldKind::Password),
    ])
}

/// Case-insensitive substring match over all text shown in the booking row.
/// Dates and the total are matched in their displayed forms ("Sep 4, 2026",
/// "$360.00"), not the raw field values.
pub fn booking_matches(booking: &Booking, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {} {} {} {} {} {}",
        booking.id,
        booking.guest_name,
        booking.guest_email,
        booking.room_number,
        format::format_date(&booking.check_in),
        format::format_date(&booking.check_out),
        format::format_currency(booking.total_amount),
        booking.status,
        booking.payment
    )
    .to_lowercase();
    haystack.contains(&query)
}

fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "B-1001".to_string(),
            guest_name: "Alice Johnson".to_string(),
            guest_email: "alice@example.com".to_string(),
            room_number: "101".to_string(),
            check_in: "2026-09-01".to_string(),
            check_out: "2026-09-04".to_string(),
            price_per_night: 120.0,
            total_amount: 360.0,
            status: BookingStatus::Confirmed,
            payment: PaymentStatus::Paid,
        },
        Booking {
            id: "B-1002".to_string(),
            guest_name: "Bob Martinez".to_string(),
            guest_email: "bob@example.com".to_string(),
            room_number: "204".to_string(),
            check_in: "2026-09-03".to_string(),
            check_out: "2026-09-05".to_string(),
            price_per_night: 95.0,
            total_amount: 190.0,
            status: BookingStatus::Pending,
            payment: PaymentStatus::Unpaid,
        },
        Booking {
            id: "B-1003".to_string(),
            guest_name: "Chen Wei".to_string(),
            guest_email: "chen.wei@example.com".to_string(),
            room_number: "310".to_string(),
            check_in: "2026-08-28".to_string(),
            check_out: "2026-08-30".to_string(),
            price_per_night: 150.0,
            total_amount: 300.0,
            status: BookingStatus::Cancelled,
            payment: PaymentStatus::Unpaid,
        },
    ]
}

fn sample_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "S-101".to_string(),
            name: "Dana Price".to_string(),
            email: "dana@smartstay.example".to_string(),
            role: StaffRole::Admin,
        },
        StaffMember {
            id: "S-102".to_string(),
            name: "Evan Reed".to_string(),
            email: "evan@smartstay.example".to_string(),
            role: StaffRole::Receptionist,
        },
    ]
}
