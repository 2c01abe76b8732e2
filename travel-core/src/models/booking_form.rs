use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculations::common::nights_between;

/// Identifies one input on the booking form.
///
/// The string form is the element id used by the booking page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    CheckIn,
    CheckOut,
    Guests,
    PromoCode,
    Package,
    Destination,
    Name,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        Self::CheckIn,
        Self::CheckOut,
        Self::Guests,
        Self::PromoCode,
        Self::Package,
        Self::Destination,
        Self::Name,
        Self::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "checkin",
            Self::CheckOut => "checkout",
            Self::Guests => "guests",
            Self::PromoCode => "promoCode",
            Self::Package => "package",
            Self::Destination => "destination",
            Self::Name => "name",
            Self::Email => "email",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }
}

/// Booking form values after conversion from raw field text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFormState {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guest_count: u32,
    pub promo_code: String,

    /// Package selector, matched against catalog labels.
    pub package: String,
    /// Destination selector, matched against destination patterns.
    pub destination: String,

    pub name: String,
    pub email: String,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guest_count: 1,
            promo_code: String::new(),
            package: String::new(),
            destination: String::new(),
            name: String::new(),
            email: String::new(),
        }
    }
}

impl BookingFormState {
    /// Whole nights between check-in and check-out; 0 when a date is missing
    /// or the stay is inverted.
    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn form_field_ids_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn form_field_parse_rejects_unknown_id() {
        assert_eq!(FormField::parse("phone"), None);
        assert_eq!(FormField::parse("promocode"), None);
    }

    #[test]
    fn default_state_has_one_guest_and_no_nights() {
        let state = BookingFormState::default();

        assert_eq!(state.guest_count, 1);
        assert_eq!(state.nights(), 0);
    }
}
