//! Cart handlers.

use tracing::{info, instrument, warn};

use amazin_core::{Book, BookId, CartItem, Price, ShoppingCart};

use super::Outcome;
use crate::api::ApiError;
use crate::error::Result;
use crate::state::Storefront;
use crate::ui::ToastKind;

const ADDED: &str = "Book added to cart!";
const ADD_FAILED: &str = "Failed to add book to cart";
const QUICK_ADDED: &str = "Added to cart!";
const QUICK_ADD_FAILED: &str = "Failed to add to cart";
const CONFIRM_REMOVE: &str = "Remove this item from your cart?";
const REMOVE_FAILED: &str = "Failed to remove item";
const UPDATE_FAILED: &str = "Failed to update quantity";
const CONFIRM_CLEAR: &str = "Remove all items from your cart?";
const CLEAR_FAILED: &str = "Failed to clear cart";
const LOAD_FAILED: &str = "Failed to load cart";

/// One cart line joined with its book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub book: Book,
    pub quantity: u32,
    pub line_total: Price,
}

/// Cart page data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Price::ZERO,
            item_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Storefront {
    async fn add_item(&self, book_id: &BookId, quantity: &str) -> Result<ShoppingCart> {
        let item = CartItem::from_input(book_id.clone(), quantity)?;
        Ok(self.client().add_cart_item(self.user_id(), &item).await?)
    }

    /// Add a book to the cart, confirming with a dialog.
    ///
    /// The quantity is the raw input text. Non-numeric or sub-1 quantities
    /// are rejected without a request.
    ///
    /// # Errors
    ///
    /// Returns the validation or backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn add_to_cart(&self, book_id: &BookId, quantity: &str) -> Result<ShoppingCart> {
        match self.add_item(book_id, quantity).await {
            Ok(cart) => {
                info!(items = cart.item_count(), "Book added to cart");
                self.dialogs().alert(ADDED);
                Ok(cart)
            }
            Err(e) => Err(self.alert_failure(e, ADD_FAILED)),
        }
    }

    /// Add a book to the cart, reporting through a toast instead of a dialog.
    ///
    /// # Errors
    ///
    /// Returns the validation or backend error after showing an error toast.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn quick_add_to_cart(
        &self,
        book_id: &BookId,
        quantity: &str,
    ) -> Result<ShoppingCart> {
        match self.add_item(book_id, quantity).await {
            Ok(cart) => {
                info!(items = cart.item_count(), "Book quick-added to cart");
                self.notifier().notify(QUICK_ADDED, ToastKind::Success);
                Ok(cart)
            }
            Err(e) => {
                tracing::error!(error = %e, "{QUICK_ADD_FAILED}");
                self.notifier()
                    .notify(&e.user_message(QUICK_ADD_FAILED), ToastKind::Error);
                Err(e)
            }
        }
    }

    /// Remove a book's line after confirmation, then reload.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn remove_from_cart(&self, book_id: &BookId) -> Result<Outcome> {
        if !self.dialogs().confirm(CONFIRM_REMOVE) {
            return Ok(Outcome::Declined);
        }

        match self.client().remove_cart_item(self.user_id(), book_id).await {
            Ok(()) => {
                self.navigator().reload();
                Ok(Outcome::Done)
            }
            Err(e) => Err(self.alert_fixed(e, REMOVE_FAILED)),
        }
    }

    /// Set a line's quantity, then reload.
    ///
    /// The quantity is forwarded as given; the backend decides what a
    /// non-positive quantity means.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn update_cart_quantity(&self, book_id: &BookId, quantity: i64) -> Result<()> {
        match self
            .client()
            .update_cart_item_quantity(self.user_id(), book_id, quantity)
            .await
        {
            Ok(()) => {
                self.navigator().reload();
                Ok(())
            }
            Err(e) => Err(self.alert_fixed(e, UPDATE_FAILED)),
        }
    }

    /// Empty the cart after confirmation, then reload.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn clear_cart(&self) -> Result<Outcome> {
        if !self.dialogs().confirm(CONFIRM_CLEAR) {
            return Ok(Outcome::Declined);
        }

        match self.client().clear_cart(self.user_id()).await {
            Ok(()) => {
                self.navigator().reload();
                Ok(Outcome::Done)
            }
            Err(e) => Err(self.alert_fixed(e, CLEAR_FAILED)),
        }
    }

    /// Load the cart page: each line joined with its book, plus the total.
    ///
    /// Lines whose book no longer exists are skipped.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn view_cart(&self) -> Result<CartView> {
        self.load_cart_view()
            .await
            .map_err(|e| self.alert_failure(e, LOAD_FAILED))
    }

    async fn load_cart_view(&self) -> std::result::Result<CartView, ApiError> {
        let cart = self.client().get_cart(self.user_id()).await?;
        if cart.is_empty() {
            return Ok(CartView::empty());
        }

        let mut lines = Vec::with_capacity(cart.items.len());
        for item in cart.items {
            let book = match self.client().get_book(&item.book_id).await {
                Ok(book) => book,
                Err(e) if e.status() == Some(404) => {
                    warn!(book_id = %item.book_id, "Skipping cart line for missing book");
                    continue;
                }
                Err(e) => return Err(e),
            };
            let line_total = book.price.unwrap_or(Price::ZERO).times(item.quantity);
            lines.push(CartLine {
                book,
                quantity: item.quantity,
                line_total,
            });
        }

        Ok(CartView {
            total: lines.iter().map(|line| line.line_total).sum(),
            item_count: lines.iter().map(|line| line.quantity).sum(),
            lines,
        })
    }
}
