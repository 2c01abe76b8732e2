//! Booking page controller.
//!
//! Holds the raw text of every booking form field and republishes the price
//! estimate, the submit flag and the invalid-field indicators whenever a
//! field changes. Nothing is cached between events: each input rebuilds the
//! form state and recomputes everything.

use std::collections::BTreeMap;

use tracing::debug;
use travel_core::{
    BookingEstimator, BookingFormState, FormField, PriceEstimate, PricingConfig,
    ValidationReport, validate,
};

use crate::utils::{parse_form_date, parse_guest_count};

#[derive(Debug, Clone)]
pub struct BookingPage {
    config: PricingConfig,
    fields: BTreeMap<FormField, String>,

    // Published state, rebuilt by `refresh`.
    estimate: PriceEstimate,
    estimate_text: String,
    report: ValidationReport,
}

impl BookingPage {
    /// Creates the page with empty fields and a guest count of 1, then
    /// computes the estimate and validation straight away.
    pub fn new(config: PricingConfig) -> Self {
        Self::with_values(config, [(FormField::Guests, "1".to_string())])
    }

    /// Creates the page from initial field values. Fields not listed start
    /// empty.
    pub fn with_values(
        config: PricingConfig,
        values: impl IntoIterator<Item = (FormField, String)>,
    ) -> Self {
        let fields = values.into_iter().collect();
        let form = Self::build_form_state(&fields);
        let estimate = BookingEstimator::new(&config).estimate(&form);
        let estimate_text = estimate.display_text();
        let report = validate(&form);

        Self {
            config,
            fields,
            estimate,
            estimate_text,
            report,
        }
    }

    /// Handles an input or change event on `field`.
    pub fn on_input(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        self.fields.insert(field, value.into());
        self.refresh();
    }

    /// Handles an event from the element with the given id. Events from
    /// elements outside the booking form are ignored; returns whether the
    /// event was handled.
    pub fn on_input_by_id(
        &mut self,
        element_id: &str,
        value: impl Into<String>,
    ) -> bool {
        match FormField::parse(element_id) {
            Some(field) => {
                self.on_input(field, value);
                true
            }
            None => false,
        }
    }

    /// Current raw text of `field`.
    pub fn value(
        &self,
        field: FormField,
    ) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Collects the current field values into a [`BookingFormState`].
    pub fn form_state(&self) -> BookingFormState {
        Self::build_form_state(&self.fields)
    }

    pub fn estimate(&self) -> &PriceEstimate {
        &self.estimate
    }

    /// Text of the estimate box.
    pub fn estimate_text(&self) -> &str {
        &self.estimate_text
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.report.is_valid()
    }

    pub fn is_field_invalid(
        &self,
        field: FormField,
    ) -> bool {
        !self.report.is_field_valid(field)
    }

    pub fn invalid_fields(&self) -> Vec<FormField> {
        self.report.invalid_fields()
    }

    fn refresh(&mut self) {
        let form = self.form_state();
        let was_valid = self.report.is_valid();

        self.estimate = BookingEstimator::new(&self.config).estimate(&form);
        self.estimate_text = self.estimate.display_text();
        self.report = validate(&form);

        if was_valid != self.report.is_valid() {
            debug!(
                valid = self.report.is_valid(),
                invalid = ?self.report.invalid_fields(),
                "booking form validity changed"
            );
        }
    }

    fn build_form_state(fields: &BTreeMap<FormField, String>) -> BookingFormState {
        let text = |field: FormField| fields.get(&field).cloned().unwrap_or_default();

        BookingFormState {
            check_in: parse_form_date(&text(FormField::CheckIn)),
            check_out: parse_form_date(&text(FormField::CheckOut)),
            guest_count: parse_guest_count(&text(FormField::Guests)),
            promo_code: text(FormField::PromoCode),
            package: text(FormField::Package),
            destination: text(FormField::Destination),
            name: text(FormField::Name),
            email: text(FormField::Email),
        }
    }
}
