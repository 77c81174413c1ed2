//! Checkout modal, order placement, and order history.

use tracing::{debug, info, instrument, warn};

use amazin_core::payment::PaymentFields;
use amazin_core::{Order, OrderId, UserId};

use crate::error::{AppError, MISSING_PAYMENT_FIELDS, Result};
use crate::state::Storefront;
use crate::ui::CheckoutModal;

const CHECKOUT_FAILED: &str = "Checkout failed. Some items may be out of stock.";
const ORDERS_FAILED: &str = "Failed to load orders";
const ORDER_FAILED: &str = "Failed to load order";

/// Orders page of a user, e.g. `/orders?userId=user123`.
#[must_use]
pub fn orders_url(user_id: &UserId) -> String {
    format!("/orders?userId={}", urlencoding::encode(user_id.as_str()))
}

impl Storefront {
    pub fn show_checkout_modal(&self, modal: &mut CheckoutModal) {
        debug!(user_id = %self.user_id(), "Opening checkout");
        modal.show();
    }

    /// Hide the modal and reset its payment fields.
    pub fn close_checkout_modal(&self, modal: &mut CheckoutModal) {
        debug!(user_id = %self.user_id(), "Closing checkout");
        modal.close();
    }

    /// Submit the checkout form.
    ///
    /// Blank payment fields abort with a dialog and leave the modal as it
    /// is. Otherwise the modal is closed and the cart is converted into an
    /// order; payment details never leave the client. On success the user
    /// sees the order id and is sent to their orders page.
    ///
    /// # Errors
    ///
    /// Returns the validation or backend error after alerting the user.
    #[instrument(skip(self, modal), fields(user_id = %self.user_id()))]
    pub async fn process_checkout(&self, modal: &mut CheckoutModal) -> Result<Order> {
        if let Err(e) = PaymentFields::from_form(&*modal).validate() {
            warn!(error = %e, "Checkout blocked by missing payment fields");
            self.dialogs().alert(MISSING_PAYMENT_FIELDS);
            return Err(AppError::from(e));
        }

        self.close_checkout_modal(modal);

        match self.client().checkout(self.user_id()).await {
            Ok(order) => {
                info!(order_id = %order.id, status = %order.status, "Order placed");
                self.dialogs()
                    .alert(&format!("Order placed successfully! Order ID: {}", order.id));
                self.navigator().navigate(&orders_url(self.user_id()));
                Ok(order)
            }
            Err(e) => Err(self.alert_failure(e, CHECKOUT_FAILED)),
        }
    }

    /// The user's past orders.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.client()
            .list_user_orders(self.user_id())
            .await
            .map_err(|e| self.alert_failure(e, ORDERS_FAILED))
    }

    /// A single order by id.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn view_order(&self, order_id: &OrderId) -> Result<Order> {
        self.client()
            .get_order(order_id)
            .await
            .map_err(|e| self.alert_failure(e, ORDER_FAILED))
    }
}
