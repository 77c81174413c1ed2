//! Book and recommendation listings.

use tracing::{info, instrument};

use crate::api::BookQuery;
use crate::error::Result;
use crate::listing::BookListing;
use crate::state::Storefront;

const BOOKS_FAILED: &str = "Failed to load books";
const RECOMMENDATIONS_FAILED: &str = "Failed to load recommendations";

/// Recommendation page data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    /// Backend explanation, e.g. why popular books are shown.
    pub message: String,
    /// True when no similar readers were found.
    pub fallback: bool,
    pub listing: BookListing,
}

impl Storefront {
    /// Load the catalog into a filterable listing.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self))]
    pub async fn load_books(&self, query: &BookQuery) -> Result<BookListing> {
        let books = self
            .client()
            .list_books(query)
            .await
            .map_err(|e| self.alert_failure(e, BOOKS_FAILED))?;
        Ok(BookListing::from_books(&books))
    }

    /// Load up to `limit` recommendations for the user into a filterable
    /// listing with its genre options initialized.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self), fields(user_id = %self.user_id()))]
    pub async fn load_recommendations(&self, limit: u32) -> Result<Recommendations> {
        let response = self
            .client()
            .get_recommendations(self.user_id(), limit)
            .await
            .map_err(|e| self.alert_failure(e, RECOMMENDATIONS_FAILED))?;

        info!(
            count = response.books.len(),
            fallback = response.fallback,
            "Recommendations loaded"
        );

        Ok(Recommendations {
            message: response.message,
            fallback: response.fallback,
            listing: BookListing::from_books(&response.books),
        })
    }
}
