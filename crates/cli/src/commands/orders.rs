//! `amazin orders`

use amazin_core::{Order, OrderId};
use amazin_storefront::{AppError, Storefront};

use crate::terminal::say;

/// List the user's orders, newest first.
///
/// # Errors
///
/// Returns an error if the orders cannot be loaded.
pub async fn list(storefront: &Storefront) -> Result<(), AppError> {
    let mut orders = storefront.list_orders().await?;
    if orders.is_empty() {
        say("No orders yet.");
        return Ok(());
    }

    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    for order in &orders {
        render(order);
    }
    Ok(())
}

/// Show one order with its items.
///
/// # Errors
///
/// Returns an error if the order cannot be loaded.
pub async fn show(storefront: &Storefront, id: &str) -> Result<(), AppError> {
    let order = storefront.view_order(&OrderId::new(id)).await?;
    render(&order);
    Ok(())
}

fn render(order: &Order) {
    say(&format_order(order));
    for item in &order.items {
        let title = item.book_title.as_deref().unwrap_or(item.book_id.as_str());
        let total = item
            .line_total()
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        say(&format!("    {title} x{}  {total}", item.quantity));
    }
}

fn format_order(order: &Order) -> String {
    let date = order.order_date.map_or_else(
        || "-".to_string(),
        |d| d.format("%Y-%m-%d %H:%M").to_string(),
    );
    let total = order
        .total_amount
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    format!(
        "{:<12} {:<10} {date}  {total}",
        order.id.as_str(),
        order.status.to_string()
    )
}
