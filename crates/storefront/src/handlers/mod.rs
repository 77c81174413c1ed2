//! User-action handlers.
//!
//! Each handler is a method on [`Storefront`]. It performs one backend call
//! (two for the cart view), reports the outcome through the UI capabilities,
//! and returns the result so the caller can react to it as well. A failed
//! call is logged once at `error` level before the user sees a message.
//!
//! - `cart` - add, quick add, remove, update quantity, clear, view
//! - `checkout` - payment modal and order placement, order history
//! - `books` - catalog administration
//! - `listing` - book and recommendation listings

mod books;
mod cart;
mod checkout;
mod listing;

pub use cart::{CartLine, CartView};
pub use checkout::orders_url;
pub use listing::Recommendations;

use tracing::error;

use crate::error::AppError;
use crate::state::Storefront;

/// Result of a handler guarded by a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action ran.
    Done,
    /// The user declined; nothing was sent.
    Declined,
}

impl Storefront {
    /// Log a failure and alert the user with the backend message or
    /// `fallback`.
    fn alert_failure(&self, err: impl Into<AppError>, fallback: &str) -> AppError {
        let err = err.into();
        error!(error = %err, user_id = %self.user_id(), "{fallback}");
        self.dialogs().alert(&err.user_message(fallback));
        err
    }

    /// Log a failure and alert the user with a fixed message.
    fn alert_fixed(&self, err: impl Into<AppError>, message: &str) -> AppError {
        let err = err.into();
        error!(error = %err, user_id = %self.user_id(), "{message}");
        self.dialogs().alert(message);
        err
    }
}
