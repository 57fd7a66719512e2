pub mod booking_form;
pub mod bookings_table;
pub mod confirm_modal;
pub mod dashboard;
pub mod form_fields;
pub mod notifications;
pub mod staff;
pub mod theme;
