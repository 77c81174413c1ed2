//! Unified error handling for storefront handlers.
//!
//! Every handler reports failures to the user itself (dialog or toast) and
//! then returns the error so front ends can set an exit status. The text the
//! user sees comes from [`AppError::user_message`].

use thiserror::Error;

use amazin_core::CartError;
use amazin_core::payment::PaymentError;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::StoreError;

/// Shown when any payment field is blank.
pub const MISSING_PAYMENT_FIELDS: &str = "Please fill in all payment fields";

/// Shown when a cart quantity input is not a positive integer.
pub const INVALID_QUANTITY: &str = "Please enter a valid quantity";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Client storage could not be read or written.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Cart quantity input was rejected before any request.
    #[error("Invalid cart item: {0}")]
    Cart(#[from] CartError),

    /// Payment form failed validation.
    #[error("Invalid payment details: {0}")]
    Payment(#[from] PaymentError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Text to show the user for this error.
    ///
    /// A message sent by the backend wins. Other backend and storage
    /// failures are shown as `fallback`, so transport details never reach
    /// the user.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(err) => err.server_message().unwrap_or(fallback).to_string(),
            Self::Payment(_) => MISSING_PAYMENT_FIELDS.to_string(),
            Self::Cart(_) => INVALID_QUANTITY.to_string(),
            Self::Store(_) | Self::Config(_) => fallback.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
