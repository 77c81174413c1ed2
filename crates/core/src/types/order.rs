//! Order types returned by checkout and the order history endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::id::{BookId, OrderId, UserId};
use super::price::Price;
use super::status::OrderStatus;

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_amount: Option<Price>,
    #[serde(default)]
    pub order_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// One purchased line, with the price captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub book_id: BookId,
    #[serde(default)]
    pub book_title: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub price_at_purchase: Option<Price>,
}

impl OrderItem {
    /// Line total, or `None` when the purchase price is unknown.
    #[must_use]
    pub fn line_total(&self) -> Option<Price> {
        self.price_at_purchase.map(|p| p.times(self.quantity))
    }
}
