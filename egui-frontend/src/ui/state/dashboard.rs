//! # Dashboard State Module
//!
//! Periodic dashboard refresh and the headline metric cards.
//!
//! ## Responsibilities:
//! - A repeating 30-second refresh timer that is started when the dashboard
//!   tab becomes active and cancelled deterministically when it is left
//!   (the web app leaked its interval until page unload)
//! - A 1-second full-screen loading overlay around each refresh
//! - Metric cards computed from the in-memory booking list; the actual data
//!   fetch is a placeholder
//!
//! No backoff and no error handling: the refresh performs no real I/O.

use shared::{Booking, BookingStatus, PaymentStatus};
use std::time::{Duration, Instant};

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const OVERLAY_DURATION: Duration = Duration::from_secs(1);

/// Repeating refresh timer with explicit start/cancel.
#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    next_due: Instant,
    overlay_until: Option<Instant>,
}

impl RefreshTimer {
    pub fn start(now: Instant) -> Self {
        Self {
            next_due: now + REFRESH_INTERVAL,
            overlay_until: None,
        }
    }

    /// Advance the timer; returns true when a refresh fired this tick.
    ///
    /// A fired refresh shows the loading overlay for [`OVERLAY_DURATION`] and
    /// schedules the next refresh a full interval out.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(until) = self.overlay_until {
            if now >= until {
                self.overlay_until = None;
            }
        }

        if now >= self.next_due {
            self.next_due = now + REFRESH_INTERVAL;
            self.overlay_until = Some(now + OVERLAY_DURATION);
            true
        } else {
            false
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_until.is_some()
    }
}

/// Dashboard tab state; the timer exists only while the tab is active.
#[derive(Debug, Default)]
pub struct DashboardState {
    refresh: Option<RefreshTimer>,
}

impl DashboardState {
    /// Called when the dashboard tab becomes active.
    pub fn enter(&mut self, now: Instant) {
        if self.refresh.is_none() {
            log::info!("🔄 Dashboard active, starting 30s refresh timer");
            self.refresh = Some(RefreshTimer::start(now));
        }
    }

    /// Called when the user leaves the dashboard tab; tears the timer down.
    pub fn leave(&mut self) {
        if self.refresh.take().is_some() {
            log::info!("🔄 Dashboard left, refresh timer cancelled");
        }
    }

    /// Returns true when a refresh fired; the caller performs the (placeholder)
    /// data fetch.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.refresh.as_mut() {
            Some(timer) => timer.tick(now),
            None => false,
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.refresh.map(|t| t.overlay_visible()).unwrap_or(false)
    }

    pub fn is_active(&self) -> bool {
        self.refresh.is_some()
    }
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub cancelled_bookings: usize,
    pub revenue: f64,
}

impl DashboardMetrics {
    /// Compute the cards from the booking list. Revenue counts paid,
    /// non-cancelled bookings only.
    pub fn compute(bookings: &[Booking]) -> Self {
        let mut metrics = Self {
            total_bookings: bookings.len(),
            pending_bookings: 0,
            cancelled_bookings: 0,
            revenue: 0.0,
        };
        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => metrics.pending_bookings += 1,
                BookingStatus::Cancelled => metrics.cancelled_bookings += 1,
                BookingStatus::Confirmed => {}
            }
            if booking.payment == PaymentStatus::Paid && booking.status != BookingStatus::Cancelled
            {
                metrics.revenue += booking.total_amount;
            }
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: BookingStatus, payment: PaymentStatus, total: f64) -> Booking {
        Booking {
            id: "1".to_string(),
            guest_name: "Guest".to_string(),
            guest_email: "guest@example.com".to_string(),
            room_number: "101".to_string(),
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-03".to_string(),
            price_per_night: total / 2.0,
            total_amount: total,
            status,
            payment,
        }
    }

    #[test]
    fn test_timer_fires_at_interval_not_before() {
        let started = Instant::now();
        let mut timer = RefreshTimer::start(started);

        assert!(!timer.tick(started + Duration::from_secs(29)));
        assert!(timer.tick(started + Duration::from_secs(30)));

        // Next refresh is a full interval after the one that fired.
        assert!(!timer.tick(started + Duration::from_secs(59)));
        assert!(timer.tick(started + Duration::from_secs(60)));
    }

    #[test]
    fn test_overlay_shows_for_one_second_after_fire() {
        let started = Instant::now();
        let mut timer = RefreshTimer::start(started);

        let fire_time = started + Duration::from_secs(30);
        assert!(timer.tick(fire_time));
        assert!(timer.overlay_visible());

        timer.tick(fire_time + Duration::from_millis(900));
        assert!(timer.overlay_visible());

        timer.tick(fire_time + Duration::from_millis(1100));
        assert!(!timer.overlay_visible());
    }

    #[test]
    fn test_leaving_dashboard_cancels_timer() {
        let now = Instant::now();
        let mut state = DashboardState::default();
        state.enter(now);
        assert!(state.is_active());

        state.leave();
        assert!(!state.is_active());
        assert!(!state.tick(now + Duration::from_secs(120)));
    }

    #[test]
    fn test_metrics_count_statuses_and_paid_revenue() {
        let bookings = vec![
            booking(BookingStatus::Confirmed, PaymentStatus::Paid, 200.0),
            booking(BookingStatus::Pending, PaymentStatus::Unpaid, 150.0),
            booking(BookingStatus::Cancelled, PaymentStatus::Paid, 300.0),
        ];
        let metrics = DashboardMetrics::compute(&bookings);
        assert_eq!(metrics.total_bookings, 3);
        assert_eq!(metrics.pending_bookings, 1);
        assert_eq!(metrics.cancelled_bookings, 1);
        assert_eq!(metrics.revenue, 200.0);
    }
}
