//! Checkout payment form: presence validation and input masking.
//!
//! Payment details are only checked for presence. They are never sent to
//! the backend; the checkout call itself carries no body.

use thiserror::Error;

use crate::form::FormSource;

/// Form field ids of the checkout payment form.
pub mod fields {
    pub const CARD_NAME: &str = "cardName";
    pub const CARD_NUMBER: &str = "cardNumber";
    pub const EXPIRY_DATE: &str = "expiryDate";
    pub const CVV: &str = "cvv";
    pub const BILLING_ADDRESS: &str = "billingAddress";

    /// All payment fields, in form order.
    pub const ALL: [&str; 5] = [CARD_NAME, CARD_NUMBER, EXPIRY_DATE, CVV, BILLING_ADDRESS];
}

/// Payment validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// One or more required fields are blank.
    #[error("missing payment fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// The five payment inputs of the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFields {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub billing_address: String,
}

impl PaymentFields {
    /// Read the payment fields from a form.
    #[must_use]
    pub fn from_form(form: &impl FormSource) -> Self {
        Self {
            card_name: form.value(fields::CARD_NAME),
            card_number: form.value(fields::CARD_NUMBER),
            expiry_date: form.value(fields::EXPIRY_DATE),
            cvv: form.value(fields::CVV),
            billing_address: form.value(fields::BILLING_ADDRESS),
        }
    }

    /// Check that every field is filled in.
    ///
    /// Whitespace-only input counts as blank.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::MissingFields` listing every blank field id.
    pub fn validate(&self) -> Result<(), PaymentError> {
        let values = [
            (fields::CARD_NAME, &self.card_name),
            (fields::CARD_NUMBER, &self.card_number),
            (fields::EXPIRY_DATE, &self.expiry_date),
            (fields::CVV, &self.cvv),
            (fields::BILLING_ADDRESS, &self.billing_address),
        ];

        let missing: Vec<&'static str> = values
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(id, _)| id)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::MissingFields(missing))
        }
    }
}

/// Re-render a card number input as digit groups of four.
///
/// `"4111111111111111"` becomes `"4111 1111 1111 1111"`.
#[must_use]
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-render an expiry input as `MM/YY`.
///
/// Non-digits are dropped and at most four digits are kept. The slash
/// appears as soon as two digits are present, so `"12"` becomes `"12/"`.
#[must_use]
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() < 2 {
        return digits;
    }
    let (month, year) = digits.split_at(2);
    format!("{month}/{year}")
}
