//! Consultation form validation.
//!
//! Every field is checked on its own and all failures are reported
//! together, in form field order, with at most one message per field.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::types::NewLead;

/// Message for a required field that is absent or blank.
pub const REQUIRED: &str = "This field is required.";
/// Message for a mobile number that is not exactly ten digits.
pub const INVALID_MOBILE: &str = "Valid 10-digit mobile number is required";
/// Message for a PIN code that is not exactly six digits.
pub const INVALID_PIN: &str = "Valid 6-digit PIN code is required";

/// Column limits, in characters.
pub const FULL_NAME_MAX: usize = 255;
/// Mobile numbers are stored in a 15-character column.
pub const MOBILE_NUMBER_MAX: usize = 15;
/// District column limit.
pub const DISTRICT_MAX: usize = 100;
/// PIN code column limit.
pub const PIN_CODE_MAX: usize = 10;

/// Raw consultation form as posted by the browser.
///
/// Every field is optional here so that a missing field becomes a
/// validation message instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsultationForm {
    /// Applicant's full name.
    pub full_name: Option<String>,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// District.
    pub district: Option<String>,
    /// PIN code.
    pub pin_code: Option<String>,
    /// Optional free-text message.
    pub message: Option<String>,
}

impl ConsultationForm {
    /// Validates the form, returning the cleaned lead or every field error.
    pub fn validate(&self) -> Result<NewLead, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = text_field(
            &mut errors,
            "full_name",
            self.full_name.as_deref(),
            FULL_NAME_MAX,
        );
        let mobile_number = text_field(
            &mut errors,
            "mobile_number",
            self.mobile_number.as_deref(),
            MOBILE_NUMBER_MAX,
        )
        .and_then(|m| digits_field(&mut errors, "mobile_number", m, 10, INVALID_MOBILE));
        let district = text_field(
            &mut errors,
            "district",
            self.district.as_deref(),
            DISTRICT_MAX,
        );
        let pin_code = text_field(
            &mut errors,
            "pin_code",
            self.pin_code.as_deref(),
            PIN_CODE_MAX,
        )
        .and_then(|p| digits_field(&mut errors, "pin_code", p, 6, INVALID_PIN));
        let message = cleaned(self.message.as_deref());

        match (full_name, mobile_number, district, pin_code) {
            (Some(full_name), Some(mobile_number), Some(district), Some(pin_code))
                if errors.is_empty() =>
            {
                Ok(NewLead::new(
                    full_name,
                    mobile_number,
                    district,
                    pin_code,
                    message,
                ))
            }
            _ => Err(errors),
        }
    }
}

/// Trimmed value, or `None` when absent or blank.
fn cleaned(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn text_field(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: Option<&str>,
    max_chars: usize,
) -> Option<String> {
    let Some(value) = cleaned(raw) else {
        errors.push(field, REQUIRED);
        return None;
    };
    let len = value.chars().count();
    if len > max_chars {
        errors.push(
            field,
            format!("Ensure this value has at most {max_chars} characters (it has {len})."),
        );
        return None;
    }
    Some(value)
}

fn digits_field(
    errors: &mut FieldErrors,
    field: &'static str,
    value: String,
    digits: usize,
    message: &'static str,
) -> Option<String> {
    if is_digits(&value, digits) {
        Some(value)
    } else {
        errors.push(field, message);
        None
    }
}

/// `true` when `value` is exactly `len` characters, all decimal digits.
///
/// Any script's decimal digits count (general category `Nd`), so `৯৮৭৬৫৪৩২১০`
/// is a valid mobile number just like `9876543210`.
pub fn is_digits(value: &str, len: usize) -> bool {
    value.chars().count() == len
        && value
            .chars()
            .all(|c| c.general_category() == GeneralCategory::DecimalNumber)
}

// ============================================================================
// FieldErrors
// ============================================================================

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, e.g. `mobile_number`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// Ordered field → message pairs.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A set holding a single error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Records an error unless the field already has one.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Field names in the order they failed.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for e in &self.0 {
            map.serialize_entry(&e.field, &e.message)?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}
