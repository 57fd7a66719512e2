//! # Export Module
//!
//! CSV export of the bookings table.
//!
//! ## Responsibilities:
//! - Serialize the currently visible bookings to CSV
//! - Write the file under a date-stamped name to the Documents folder
//!   (home directory as fallback)
//!
//! The web app joined cell text with bare commas and never escaped embedded
//! delimiters; that was a latent bug, so this implementation goes through
//! `csv::Writer` and quotes fields properly.

use chrono::NaiveDate;
use shared::Booking;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not determine an export directory")]
    NoExportDir,
    #[error("failed to serialize bookings: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

const CSV_HEADER: [&str; 9] = [
    "booking_id",
    "guest_name",
    "guest_email",
    "room",
    "check_in",
    "check_out",
    "total_amount",
    "status",
    "payment",
];

/// Serialize bookings to CSV text, header row first.
pub fn bookings_to_csv(bookings: &[Booking]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for booking in bookings {
        writer.write_record([
            booking.id.clone(),
            booking.guest_name.clone(),
            booking.guest_email.clone(),
            booking.room_number.clone(),
            booking.check_in.clone(),
            booking.check_out.clone(),
            format!("{:.2}", booking.total_amount),
            booking.status.to_string(),
            booking.payment.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Date-stamped export filename, e.g. `smartstay_bookings_20240105.csv`.
pub fn export_filename(today: NaiveDate) -> String {
    format!("smartstay_bookings_{}.csv", today.format("%Y%m%d"))
}

/// Default export directory: Documents, falling back to the home directory.
pub fn default_export_dir() -> Option<PathBuf> {
    dirs::document_dir().or_else(dirs::home_dir)
}

/// Write the bookings CSV into `dir`, creating it as needed. Returns the full
/// path of the written file.
pub fn export_to_file(
    bookings: &[Booking],
    dir: &Path,
    today: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let csv_content = bookings_to_csv(bookings)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(today));
    fs::write(&path, &csv_content)?;
    log::info!(
        "📄 Exported {} bookings ({} bytes) to {}",
        bookings.len(),
        csv_content.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BookingStatus, PaymentStatus};

    fn booking(guest_name: &str) -> Booking {
        Booking {
            id: "B-1001".to_string(),
            guest_name: guest_name.to_string(),
            guest_email: "guest@example.com".to_string(),
            room_number: "204".to_string(),
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-03".to_string(),
            price_per_night: 100.0,
            total_amount: 200.0,
            status: BookingStatus::Confirmed,
            payment: PaymentStatus::Paid,
        }
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_booking() {
        let csv = bookings_to_csv(&[booking("Alice"), booking("Bob")]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("booking_id,guest_name"));
        assert_eq!(
            lines[1],
            "B-1001,Alice,guest@example.com,204,2024-01-01,2024-01-03,200.00,Confirmed,Paid"
        );
    }

    #[test]
    fn test_embedded_commas_and_quotes_are_escaped() {
        let csv = bookings_to_csv(&[booking(r#"Smith, John "JJ""#)]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(r#""Smith, John ""JJ""""#));
    }

    #[test]
    fn test_export_filename_is_date_stamped() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(export_filename(today), "smartstay_bookings_20240105.csv");
    }

    #[test]
    fn test_export_writes_file_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        let path = export_to_file(&[booking("Alice")], dir.path(), today).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "smartstay_bookings_20240105.csv"
        );

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Alice"));
    }
}
