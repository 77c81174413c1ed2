//! `amazin cart ...`

use amazin_core::BookId;
use amazin_core::stepper::QuantityStepper;
use amazin_storefront::handlers::{CartLine, CartView};
use amazin_storefront::{AppError, Storefront};

use crate::terminal::{TerminalUi, say};

/// Show the cart with line totals and the grand total.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded.
pub async fn show(storefront: &Storefront) -> Result<(), AppError> {
    let view = storefront.view_cart().await?;
    render(&view);
    Ok(())
}

fn render(view: &CartView) {
    if view.is_empty() {
        say("Your cart is empty.");
        return;
    }

    for line in &view.lines {
        say(&format!(
            "{:<12} {} by {}  x{}  {}",
            line.book.id.as_str(),
            line.book.title,
            line.book.author,
            line.quantity,
            line.line_total
        ));
    }
    say(&format!("{} item(s), total {}", view.item_count, view.total));
}

/// Add a book, reporting through a dialog or (with `quick`) a toast.
///
/// # Errors
///
/// Returns an error if the quantity is invalid or the backend refuses.
pub async fn add(
    storefront: &Storefront,
    book: &str,
    quantity: &str,
    quick: bool,
) -> Result<(), AppError> {
    let book_id = BookId::new(book);
    if quick {
        storefront.quick_add_to_cart(&book_id, quantity).await?;
    } else {
        storefront.add_to_cart(&book_id, quantity).await?;
    }
    Ok(())
}

/// Remove a book's line.
///
/// # Errors
///
/// Returns an error if the backend refuses.
pub async fn remove(storefront: &Storefront, ui: &TerminalUi, book: &str) -> Result<(), AppError> {
    storefront.remove_from_cart(&BookId::new(book)).await?;
    refresh(storefront, ui).await
}

/// Set a line's quantity.
///
/// # Errors
///
/// Returns an error if the backend refuses.
pub async fn update(
    storefront: &Storefront,
    ui: &TerminalUi,
    book: &str,
    quantity: i64,
) -> Result<(), AppError> {
    storefront
        .update_cart_quantity(&BookId::new(book), quantity)
        .await?;
    refresh(storefront, ui).await
}

/// Step a line's quantity by one, staying within `[1, inventory]`.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded or the backend refuses.
pub async fn step(
    storefront: &Storefront,
    ui: &TerminalUi,
    book: &str,
    up: bool,
) -> Result<(), AppError> {
    let view = storefront.view_cart().await?;
    let Some(line) = view.lines.iter().find(|line| line.book.id.as_str() == book) else {
        say(&format!("{book} is not in your cart."));
        return Ok(());
    };

    let current = line.quantity;
    let mut stepper = stepper_for(line);
    let next = if up {
        stepper.increase()
    } else {
        stepper.decrease()
    };
    if next == current {
        say(&format!("Quantity stays at {current}."));
        return Ok(());
    }
    update(storefront, ui, book, i64::from(next)).await
}

/// Stepper over a cart line, bounded by the book's stock when known.
fn stepper_for(line: &CartLine) -> QuantityStepper {
    let max = line.book.inventory.map(|n| n.to_string());
    QuantityStepper::new(&line.quantity.to_string(), max.as_deref())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the backend refuses.
pub async fn clear(storefront: &Storefront, ui: &TerminalUi) -> Result<(), AppError> {
    storefront.clear_cart().await?;
    refresh(storefront, ui).await
}

/// Re-render the cart if a handler asked for a reload.
async fn refresh(storefront: &Storefront, ui: &TerminalUi) -> Result<(), AppError> {
    if ui.take_reload() {
        show(storefront).await?;
    }
    Ok(())
}
