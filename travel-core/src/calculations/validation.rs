//! Booking form validation.
//!
//! Rules (all must hold before the form can be submitted):
//! - name: more than one character after trimming
//! - email: well-formed address
//! - dates: both present and check-out at least one night after check-in
//! - package: selected (non-blank)

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{BookingFormState, FormField};

// Same pattern browsers use for `<input type="email">`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Per-field outcome of validating the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub name: bool,
    pub email: bool,
    /// Check-in date is present.
    pub check_in: bool,
    /// Check-out date is present and leaves at least one night.
    pub check_out: bool,
    pub package: bool,
}

impl ValidationReport {
    /// The validity verdict gating submission.
    pub fn is_valid(&self) -> bool {
        self.name && self.email && self.check_in && self.check_out && self.package
    }

    /// Whether `field` should be shown as valid. Fields without rules are
    /// always valid.
    pub fn is_field_valid(
        &self,
        field: FormField,
    ) -> bool {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::CheckIn => self.check_in,
            FormField::CheckOut => self.check_out,
            FormField::Package => self.package,
            FormField::Guests | FormField::PromoCode | FormField::Destination => true,
        }
    }

    /// Fields that need an invalid indicator, in form order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !self.is_field_valid(*field))
            .collect()
    }
}

/// Validates the booking form.
pub fn validate(form: &BookingFormState) -> ValidationReport {
    let nights = form.nights();

    ValidationReport {
        name: is_valid_name(&form.name),
        email: is_valid_email(&form.email),
        check_in: form.check_in.is_some(),
        check_out: form.check_out.is_some() && nights > 0,
        package: !form.package.trim().is_empty(),
    }
}

/// A name needs at least two characters once surrounding space is removed.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() > 1
}

/// Checks an email address; surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}
