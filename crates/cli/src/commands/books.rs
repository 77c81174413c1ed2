//! `amazin books ...`

use std::collections::HashMap;

use clap::Args;

use amazin_core::BookId;
use amazin_core::types::book::fields;
use amazin_storefront::api::BookQuery;
use amazin_storefront::{AppError, Storefront};

use super::render_listing;

/// Book form fields. Omitted fields are sent empty.
#[derive(Debug, Default, Args)]
pub struct BookFields {
    #[arg(long)]
    isbn: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    publisher: Option<String>,
    /// Cover image URL
    #[arg(long)]
    picture_url: Option<String>,
    #[arg(long)]
    price: Option<String>,
    /// Copies in stock
    #[arg(long)]
    inventory: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    publication_year: Option<String>,
}

impl BookFields {
    /// The fields as form values keyed by field id.
    fn into_form(self) -> HashMap<String, String> {
        [
            (fields::ISBN, self.isbn),
            (fields::TITLE, self.title),
            (fields::DESCRIPTION, self.description),
            (fields::AUTHOR, self.author),
            (fields::PUBLISHER, self.publisher),
            (fields::PICTURE_URL, self.picture_url),
            (fields::PRICE, self.price),
            (fields::INVENTORY, self.inventory),
            (fields::GENRE, self.genre),
            (fields::PUBLICATION_YEAR, self.publication_year),
        ]
        .into_iter()
        .filter_map(|(id, value)| value.map(|v| (id.to_string(), v)))
        .collect()
    }
}

/// List the catalog, optionally filtered by genre and sorted.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn list(
    storefront: &Storefront,
    genre: Option<&str>,
    sort: Option<&str>,
) -> Result<(), AppError> {
    let mut listing = storefront.load_books(&BookQuery::default()).await?;
    if let Some(genre) = genre {
        listing.filter_books(genre);
    }
    if let Some(sort) = sort {
        listing.sort_books(sort);
    }
    render_listing(&listing);
    Ok(())
}

/// Create a book.
///
/// # Errors
///
/// Returns an error if the backend refuses.
pub async fn create(storefront: &Storefront, book: BookFields) -> Result<(), AppError> {
    storefront.create_book(&book.into_form()).await?;
    Ok(())
}

/// Replace a book's fields.
///
/// # Errors
///
/// Returns an error if the backend refuses.
pub async fn update(storefront: &Storefront, id: &str, book: BookFields) -> Result<(), AppError> {
    storefront
        .update_book(&BookId::new(id), &book.into_form())
        .await?;
    Ok(())
}

/// Delete a book.
///
/// # Errors
///
/// Returns an error if the backend refuses.
pub async fn delete(storefront: &Storefront, id: &str) -> Result<(), AppError> {
    storefront.delete_book(&BookId::new(id)).await?;
    Ok(())
}
