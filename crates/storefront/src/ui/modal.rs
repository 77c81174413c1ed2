//! Checkout modal state.

use std::collections::BTreeMap;

use amazin_core::FormSource;
use amazin_core::payment::{fields, format_card_number, format_expiry};

/// The checkout modal and its payment form.
///
/// Card number and expiry inputs are masked as they are entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutModal {
    visible: bool,
    values: BTreeMap<&'static str, String>,
}

impl CheckoutModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the modal and reset every payment field.
    pub fn close(&mut self) {
        self.visible = false;
        self.values.clear();
    }

    /// Enter a value into a payment field, applying its input mask.
    ///
    /// Unknown field ids are ignored.
    pub fn input(&mut self, field: &str, raw: &str) {
        let Some(id) = fields::ALL.into_iter().find(|id| *id == field) else {
            return;
        };
        let value = match id {
            fields::CARD_NUMBER => format_card_number(raw),
            fields::EXPIRY_DATE => format_expiry(raw),
            _ => raw.to_string(),
        };
        self.values.insert(id, value);
    }
}

impl FormSource for CheckoutModal {
    fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }
}
