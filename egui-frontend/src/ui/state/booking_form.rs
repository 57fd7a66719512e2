//! # Booking Form State Module
//!
//! State and date-constraint logic for the new-booking form.
//!
//! ## Responsibilities:
//! - Enforce the checkout-after-checkin invariant (minimum check-out is
//!   check-in + 1 day; a check-out at or before check-in is cleared silently)
//! - Recompute the derived total (`nights x price per night`) on date changes
//! - Track the fixed 500 ms availability-check placeholder
//!
//! ## Purpose:
//! While editing, an invalid range is handled silently (blank total, cleared
//! check-out). At submit time the range is re-checked and a check-out at or
//! before check-in blocks submission with an inline error, since the user can
//! still type an earlier check-out directly into the field.

use chrono::NaiveDate;
use std::time::{Duration, Instant};

use super::forms::{FieldKind, FormField, FormState};

// Field order inside `BookingFormState::form`.
pub const FIELD_GUEST_NAME: usize = 0;
pub const FIELD_GUEST_EMAIL: usize = 1;
pub const FIELD_CHECK_IN: usize = 2;
pub const FIELD_CHECK_OUT: usize = 3;

/// State backing the new-booking form.
#[derive(Debug, Clone)]
pub struct BookingFormState {
    pub form: FormState,
    /// Nightly price as entered (prefilled from the selected room in the web app).
    pub price_per_night: String,
    pub room_number: String,
    /// Earliest selectable check-in date (today at form creation).
    pub min_check_in: NaiveDate,
    /// Earliest selectable check-out date; tracks check-in + 1 day.
    pub min_check_out: NaiveDate,
    /// Derived total for the stay, blank unless nights > 0 and a price is set.
    pub total: Option<f64>,
    pub availability: Option<AvailabilityCheck>,
}

impl BookingFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: FormState::new(vec![
                FormField::required("Guest name", FieldKind::Text),
                FormField::required("Email", FieldKind::Email),
                FormField::required("Check-in date", FieldKind::Date),
                FormField::required("Check-out date", FieldKind::Date),
            ]),
            price_per_night: String::new(),
            room_number: String::new(),
            min_check_in: today,
            min_check_out: today,
            total: None,
            availability: None,
        }
    }

    pub fn check_in(&self) -> &str {
        self.form.value(FIELD_CHECK_IN)
    }

    pub fn check_out(&self) -> &str {
        self.form.value(FIELD_CHECK_OUT)
    }

    fn parsed_check_in(&self) -> Option<NaiveDate> {
        parse_date(self.check_in())
    }

    fn parsed_check_out(&self) -> Option<NaiveDate> {
        parse_date(self.check_out())
    }

    /// React to a check-in change: push the check-out minimum to the day
    /// after check-in and silently clear a check-out that fell at or before
    /// the new check-in. Always recomputes the total.
    pub fn check_in_changed(&mut self) {
        if let Some(check_in) = self.parsed_check_in() {
            if let Some(min_out) = check_in.succ_opt() {
                self.min_check_out = min_out;
            }
            if let Some(check_out) = self.parsed_check_out() {
                if check_out <= check_in {
                    log::info!("Clearing check-out date {} <= check-in {}", check_out, check_in);
                    self.form.fields[FIELD_CHECK_OUT].value.clear();
                }
            }
        }
        self.recompute_total();
    }

    pub fn check_out_changed(&mut self) {
        self.recompute_total();
    }

    /// Submit-time validation: the generic field checks plus the date-range
    /// invariant (check-out strictly after check-in).
    pub fn validate(&mut self) -> bool {
        let mut is_valid = self.form.validate();

        if let (Some(check_in), Some(check_out)) = (self.parsed_check_in(), self.parsed_check_out())
        {
            if check_out <= check_in {
                self.form.fields[FIELD_CHECK_OUT].error =
                    Some("Check-out date must be after the check-in date".to_string());
                is_valid = false;
            }
        }

        is_valid
    }

    pub fn price_changed(&mut self) {
        self.recompute_total();
    }

    /// Derived total: `nights x price`, shown only when both dates parse,
    /// nights > 0 and a positive price is present. Anything else is blank.
    pub fn recompute_total(&mut self) {
        self.total = compute_total(
            self.check_in(),
            self.check_out(),
            self.price_per_night.trim().parse::<f64>().unwrap_or(0.0),
        );
    }

    /// Parsed nightly price, 0.0 when absent or unparsable.
    pub fn price(&self) -> f64 {
        self.price_per_night.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn start_availability_check(&mut self, now: Instant) {
        self.availability = Some(AvailabilityCheck::start(now));
    }

    /// Poll the pending availability check; `Some(available)` once resolved.
    pub fn poll_availability(&mut self, now: Instant) -> Option<bool> {
        let resolved = self.availability.as_ref().and_then(|c| c.poll(now));
        if resolved.is_some() {
            self.availability = None;
        }
        resolved
    }

    pub fn clear(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

/// Total for the stay, `None` whenever it cannot be displayed.
pub fn compute_total(check_in: &str, check_out: &str, price_per_night: f64) -> Option<f64> {
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    let nights = (check_out - check_in).num_days();
    if nights > 0 && price_per_night > 0.0 {
        Some(nights as f64 * price_per_night)
    } else {
        None
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Stand-in for a room-availability lookup: resolves to "available" after a
/// fixed delay with no I/O, like the web app's pre-resolved promise.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityCheck {
    started_at: Instant,
}

impl AvailabilityCheck {
    pub const DELAY: Duration = Duration::from_millis(500);

    pub fn start(now: Instant) -> Self {
        Self { started_at: now }
    }

    pub fn poll(&self, now: Instant) -> Option<bool> {
        if now.duration_since(self.started_at) >= Self::DELAY {
            Some(true)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::format::format_currency;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn form_with_dates(check_in: &str, check_out: &str) -> BookingFormState {
        let mut form = BookingFormState::new(date("2024-01-01"));
        form.form.fields[FIELD_CHECK_IN].value = check_in.to_string();
        form.form.fields[FIELD_CHECK_OUT].value = check_out.to_string();
        form
    }

    #[test]
    fn test_check_in_change_sets_min_check_out_to_next_day() {
        let mut form = form_with_dates("2024-03-10", "");
        form.check_in_changed();
        assert_eq!(form.min_check_out, date("2024-03-11"));
    }

    #[test]
    fn test_check_out_at_or_before_check_in_is_cleared() {
        let mut form = form_with_dates("2024-03-10", "2024-03-10");
        form.check_in_changed();
        assert_eq!(form.check_out(), "");

        let mut form = form_with_dates("2024-03-10", "2024-03-05");
        form.check_in_changed();
        assert_eq!(form.check_out(), "");
    }

    #[test]
    fn test_later_check_out_survives_check_in_change() {
        let mut form = form_with_dates("2024-03-10", "2024-03-12");
        form.check_in_changed();
        assert_eq!(form.check_out(), "2024-03-12");
    }

    fn filled_form(check_in: &str, check_out: &str) -> BookingFormState {
        let mut form = form_with_dates(check_in, check_out);
        form.form.fields[FIELD_GUEST_NAME].value = "Alice".to_string();
        form.form.fields[FIELD_GUEST_EMAIL].value = "alice@example.com".to_string();
        form
    }

    #[test]
    fn test_submit_validation_rejects_inverted_range() {
        let mut form = filled_form("2024-01-10", "2024-01-05");
        assert!(!form.validate());
        assert_eq!(
            form.form.fields[FIELD_CHECK_OUT].error.as_deref(),
            Some("Check-out date must be after the check-in date")
        );

        // Same-day stays are rejected too; the minimum stay is one night.
        let mut form = filled_form("2024-01-10", "2024-01-10");
        assert!(!form.validate());
    }

    #[test]
    fn test_submit_validation_accepts_valid_range() {
        let mut form = filled_form("2024-01-10", "2024-01-12");
        assert!(form.validate());
        assert_eq!(form.form.error_count(), 0);
    }

    #[test]
    fn test_two_nights_at_100_displays_200() {
        let mut form = form_with_dates("2024-01-01", "2024-01-03");
        form.price_per_night = "100".to_string();
        form.check_out_changed();
        assert_eq!(form.total, Some(200.0));
        assert_eq!(format_currency(form.total.unwrap()), "$200.00");
    }

    #[test]
    fn test_total_blank_without_price_or_valid_range() {
        assert_eq!(compute_total("2024-01-01", "2024-01-03", 0.0), None);
        assert_eq!(compute_total("2024-01-03", "2024-01-01", 100.0), None);
        assert_eq!(compute_total("2024-01-01", "2024-01-01", 100.0), None);
        assert_eq!(compute_total("garbage", "2024-01-03", 100.0), None);
    }

    #[test]
    fn test_availability_check_resolves_after_delay() {
        let started = Instant::now();
        let check = AvailabilityCheck::start(started);
        assert_eq!(check.poll(started), None);
        assert_eq!(check.poll(started + Duration::from_millis(499)), None);
        assert_eq!(check.poll(started + Duration::from_millis(500)), Some(true));
    }
}
