//! `amazin recommend ...`

use amazin_storefront::{AppError, Storefront};

use super::render_listing;
use crate::terminal::say;

/// Show recommendations, optionally filtered by genre and sorted.
///
/// # Errors
///
/// Returns an error if the recommendations cannot be loaded.
pub async fn run(
    storefront: &Storefront,
    limit: u32,
    genre: Option<&str>,
    sort: Option<&str>,
) -> Result<(), AppError> {
    let mut recs = storefront.load_recommendations(limit).await?;
    if !recs.message.is_empty() {
        say(&recs.message);
    }
    if let Some(genre) = genre {
        recs.listing.filter_books(genre);
    }
    if let Some(sort) = sort {
        recs.listing.sort_books(sort);
    }
    render_listing(&recs.listing);
    Ok(())
}
