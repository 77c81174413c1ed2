//! Shopping cart types.
//!
//! The cart lives on the backend. The client only builds line items for
//! add/update calls and reads the cart back for display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::{BookId, CartId, UserId};
use crate::form::parse_int;

/// Errors building a cart line item from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The quantity input is not a number.
    #[error("quantity is not a number: {0:?}")]
    NotANumber(String),
    /// The quantity is below one (or too large to represent).
    #[error("quantity must be at least 1, got {0}")]
    OutOfRange(i64),
}

/// A (book, quantity) pair in a user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub book_id: BookId,
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item, rejecting quantities below one.
    ///
    /// # Errors
    ///
    /// Returns `CartError::OutOfRange` if `quantity` is zero.
    pub fn new(book_id: BookId, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::OutOfRange(0));
        }
        Ok(Self { book_id, quantity })
    }

    /// Create a line item from a raw quantity input such as `"3"`.
    ///
    /// The input is read as a leading integer, so `"3 copies"` is 3.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has no leading integer or it is below one.
    pub fn from_input(book_id: BookId, quantity: &str) -> Result<Self, CartError> {
        let parsed =
            parse_int(quantity).ok_or_else(|| CartError::NotANumber(quantity.to_string()))?;
        let quantity = u32::try_from(parsed).map_err(|_| CartError::OutOfRange(parsed))?;
        Self::new(book_id, quantity)
    }
}

/// A user's cart as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    #[serde(default)]
    pub id: Option<CartId>,
    pub user_id: UserId,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl ShoppingCart {
    /// Total number of copies across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_input_parses_integer() {
        let item = CartItem::from_input(BookId::new("b1"), "3").unwrap();
        assert_eq!(item.quantity, 3);

        let body = serde_json::to_value(&item).unwrap();
        assert_eq!(body, json!({"bookId": "b1", "quantity": 3}));
    }

    #[test]
    fn test_from_input_rejects_bad_quantities() {
        assert_eq!(
            CartItem::from_input(BookId::new("b1"), "lots"),
            Err(CartError::NotANumber("lots".to_string()))
        );
        assert_eq!(
            CartItem::from_input(BookId::new("b1"), "0"),
            Err(CartError::OutOfRange(0))
        );
        assert_eq!(
            CartItem::from_input(BookId::new("b1"), "-2"),
            Err(CartError::OutOfRange(-2))
        );
    }

    #[test]
    fn test_cart_item_count() {
        let cart: ShoppingCart = serde_json::from_value(json!({
            "id": "c1",
            "userId": "u1",
            "items": [
                {"bookId": "b1", "quantity": 2},
                {"bookId": "b2", "quantity": 1}
            ]
        }))
        .unwrap();

        assert_eq!(cart.item_count(), 3);
        assert!(!cart.is_empty());
    }
}
