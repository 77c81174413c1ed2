//! Cart endpoints, keyed by user and book identifiers.

use tracing::instrument;

use amazin_core::{BookId, CartItem, ShoppingCart, UserId};

use super::{ApiError, BookstoreClient};

impl BookstoreClient {
    /// Fetch a user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_cart(&self, user_id: &UserId) -> Result<ShoppingCart, ApiError> {
        let url = self.endpoint(&["cart", user_id.as_str()])?;
        self.send_json(self.http().get(url)).await
    }

    /// Add a line item; the backend merges it with an existing line for the
    /// same book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the item.
    #[instrument(skip(self, item), fields(user_id = %user_id, book_id = %item.book_id, quantity = item.quantity))]
    pub async fn add_cart_item(
        &self,
        user_id: &UserId,
        item: &CartItem,
    ) -> Result<ShoppingCart, ApiError> {
        let url = self.endpoint(&["cart", user_id.as_str(), "items"])?;
        self.send_json(self.http().post(url).json(item)).await
    }

    /// Remove a book's line from the cart. Only the status is checked; the
    /// response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(user_id = %user_id, book_id = %book_id))]
    pub async fn remove_cart_item(
        &self,
        user_id: &UserId,
        book_id: &BookId,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["cart", user_id.as_str(), "items", book_id.as_str()])?;
        self.send_empty(self.http().delete(url)).await
    }

    /// Set the quantity of a book's line. The quantity travels as a query
    /// parameter, not a body, and the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(user_id = %user_id, book_id = %book_id))]
    pub async fn update_cart_item_quantity(
        &self,
        user_id: &UserId,
        book_id: &BookId,
        quantity: i64,
    ) -> Result<(), ApiError> {
        let mut url = self.endpoint(&["cart", user_id.as_str(), "items", book_id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("quantity", &quantity.to_string());
        self.send_empty(self.http().put(url)).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn clear_cart(&self, user_id: &UserId) -> Result<(), ApiError> {
        let url = self.endpoint(&["cart", user_id.as_str()])?;
        self.send_empty(self.http().delete(url)).await
    }
}
