//! Field-format rules for user input.
//!
//! Rules only reject; values are never trimmed or coerced. All violated
//! fields are collected so a caller can fix them in one round trip.

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::contract::error::FieldViolation;
use crate::contract::model::UserFields;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{6,14}$").expect("static phone regex"));

/// Non-empty set of field violations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Today's calendar date in UTC, the reference for date-of-birth checks.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Check every format constraint of `fields`.
///
/// `today` is passed in so callers (and tests) control the clock.
pub fn validate_fields(
    fields: &UserFields,
    max_name_length: usize,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if fields.name.trim().is_empty() {
        errors.push("name", "must not be blank");
    } else {
        let len = fields.name.chars().count();
        if len > max_name_length {
            errors.push(
                "name",
                format!("must be at most {max_name_length} characters (got {len})"),
            );
        }
    }

    if !is_valid_email(&fields.email) {
        errors.push("email", "must be a valid email address");
    }

    if fields.date_of_birth > today {
        errors.push("date_of_birth", "must not be in the future");
    }

    if !is_valid_phone(&fields.phone) {
        errors.push(
            "phone",
            "must be 7 to 15 digits with an optional leading '+' and no leading zero",
        );
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::model::{Department, Gender};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid() -> UserFields {
        UserFields {
            name: "Akhil N".into(),
            email: "akhil@example.com".into(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1996, 5, 12).unwrap(),
            phone: "+919000011111".into(),
            department: Department::Engineering,
        }
    }

    #[test]
    fn accepts_valid_fields() {
        assert!(validate_fields(&valid(), 100, today()).is_ok());
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@d.io"] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in ["", "plain", "a@b", "@b.co", "a b@c.de", "a@b .co", "a@@b.co"] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn phone_shapes() {
        for ok in ["+919000011111", "5551234", "123456789012345"] {
            assert!(is_valid_phone(ok), "{ok} should pass");
        }
        for bad in ["", "+0123456789", "123456", "1234567890123456", "555-1234", "+"] {
            assert!(!is_valid_phone(bad), "{bad} should fail");
        }
    }

    #[test]
    fn blank_name_is_rejected_without_trimming() {
        let mut f = valid();
        f.name = "   ".into();
        let err = validate_fields(&f, 100, today()).unwrap_err();
        assert!(err.has_field("name"));

        // Surrounding whitespace on a non-blank name is kept and accepted.
        let mut f = valid();
        f.name = "  Neha  ".into();
        assert!(validate_fields(&f, 100, today()).is_ok());
    }

    #[test]
    fn name_length_counts_chars() {
        let mut f = valid();
        f.name = "é".repeat(10);
        assert!(validate_fields(&f, 10, today()).is_ok());
        f.name = "é".repeat(11);
        assert!(validate_fields(&f, 10, today()).unwrap_err().has_field("name"));
    }

    #[test]
    fn date_of_birth_today_is_allowed_tomorrow_is_not() {
        let mut f = valid();
        f.date_of_birth = today();
        assert!(validate_fields(&f, 100, today()).is_ok());
        f.date_of_birth = today().succ_opt().unwrap();
        let err = validate_fields(&f, 100, today()).unwrap_err();
        assert!(err.has_field("date_of_birth"));
    }

    #[test]
    fn collects_every_violation() {
        let mut f = valid();
        f.name = String::new();
        f.email = "nope".into();
        f.phone = "12".into();
        let err = validate_fields(&f, 100, today()).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "email", "phone"]);
        assert_eq!(
            err.to_string(),
            "name: must not be blank; email: must be a valid email address; \
             phone: must be 7 to 15 digits with an optional leading '+' and no leading zero"
        );
    }
}
