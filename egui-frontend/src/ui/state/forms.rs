//! # Form Validation Module
//!
//! Submit-time validation shared by the new-booking and add-staff forms.
//!
//! ## Responsibilities:
//! - Required-field, email-shape, password-length and date-parse checks
//! - Per-field inline error messages
//! - Non-cumulative validation: every submit re-evaluates all fields from
//!   scratch, clearing previous errors first
//!
//! ## Purpose:
//! Submission is blocked while any field fails; errors are rendered inline
//! next to the offending field, never as a blocking dialog.

use chrono::NaiveDate;

/// Input kind of a form field, driving which checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// `YYYY-MM-DD` string, constrained by the booking date logic
    Date,
}

/// A single form input with its current value and inline error.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    pub fn required(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            required: true,
            value: String::new(),
            error: None,
        }
    }

    pub fn optional(label: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(label, kind)
        }
    }

}

/// A collection of fields validated together at submit time.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: Vec<FormField>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Validate every field from scratch and update inline errors.
    ///
    /// Previous errors are cleared first, so the result reflects only the
    /// current values. Returns overall form validity.
    pub fn validate(&mut self) -> bool {
        for field in &mut self.fields {
            field.error = None;
        }

        let mut is_valid = true;

        for field in &mut self.fields {
            if field.required && field.value.trim().is_empty() {
                field.error = Some("This field is required".to_string());
                is_valid = false;
                continue;
            }

            match field.kind {
                FieldKind::Email => {
                    if !field.value.is_empty() && !is_valid_email(&field.value) {
                        field.error = Some("Please enter a valid email address".to_string());
                        is_valid = false;
                    }
                }
                FieldKind::Password => {
                    if !field.value.is_empty() && field.value.chars().count() < 6 {
                        field.error =
                            Some("Password must be at least 6 characters long".to_string());
                        is_valid = false;
                    }
                }
                FieldKind::Date => {
                    if !field.value.trim().is_empty()
                        && NaiveDate::parse_from_str(field.value.trim(), "%Y-%m-%d").is_err()
                    {
                        field.error = Some("Please enter a valid date".to_string());
                        is_valid = false;
                    }
                }
                FieldKind::Text => {}
            }
        }

        is_valid
    }

    /// Clear all values and errors, returning the form to its initial state.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }
}

/// Basic email shape check: one `@`, non-empty local part, a dot somewhere in
/// a non-empty domain, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            if local.is_empty() {
                return false;
            }
            match domain.rsplit_once('.') {
                Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                None => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_required_field() -> FormState {
        FormState::new(vec![FormField::required("Guest name", FieldKind::Text)])
    }

    #[test]
    fn test_required_empty_field_blocks_with_one_error() {
        let mut form = one_required_field();
        assert!(!form.validate());
        assert_eq!(form.error_count(), 1);
        assert_eq!(
            form.fields[0].error.as_deref(),
            Some("This field is required")
        );

        // Filling the field and revalidating clears the error.
        form.fields[0].value = "Alice".to_string();
        assert!(form.validate());
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut form = one_required_field();
        form.fields[0].value = "   ".to_string();
        assert!(!form.validate());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("guest.name@hotel.example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b .co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_invalid_email_marks_field() {
        let mut form = FormState::new(vec![FormField::required("Email", FieldKind::Email)]);
        form.fields[0].value = "not-an-email".to_string();
        assert!(!form.validate());
        assert_eq!(
            form.fields[0].error.as_deref(),
            Some("Please enter a valid email address")
        );

        form.fields[0].value = "a@b.co".to_string();
        assert!(form.validate());
    }

    #[test]
    fn test_password_length_boundary() {
        let mut form = FormState::new(vec![FormField::required("Password", FieldKind::Password)]);

        form.fields[0].value = "12345".to_string();
        assert!(!form.validate());
        assert_eq!(
            form.fields[0].error.as_deref(),
            Some("Password must be at least 6 characters long")
        );

        form.fields[0].value = "123456".to_string();
        assert!(form.validate());
    }

    #[test]
    fn test_unparsable_date_marks_field() {
        let mut form = FormState::new(vec![FormField::required("Check-in date", FieldKind::Date)]);
        form.fields[0].value = "next tuesday".to_string();
        assert!(!form.validate());
        assert_eq!(
            form.fields[0].error.as_deref(),
            Some("Please enter a valid date")
        );

        form.fields[0].value = "2024-03-10".to_string();
        assert!(form.validate());
    }

    #[test]
    fn test_optional_empty_fields_skip_kind_checks() {
        let mut form = FormState::new(vec![
            FormField::optional("Email", FieldKind::Email),
            FormField::optional("Password", FieldKind::Password),
        ]);
        assert!(form.validate());
    }

    #[test]
    fn test_validation_is_not_cumulative() {
        let mut form = FormState::new(vec![
            FormField::required("Name", FieldKind::Text),
            FormField::required("Email", FieldKind::Email),
        ]);
        assert!(!form.validate());
        assert_eq!(form.error_count(), 2);

        form.fields[0].value = "Alice".to_string();
        form.fields[1].value = "alice@example.com".to_string();
        assert!(form.validate());
        assert_eq!(form.error_count(), 0);
    }
}
