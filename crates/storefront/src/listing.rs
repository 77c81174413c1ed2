//! Book listing page state: genre filter, sort, and result count.
//!
//! Filtering and sorting are never persisted. Resetting clears the controls
//! and reloads the page, which restores the backend's original order.

use tracing::debug;

use amazin_core::Book;
use amazin_core::listing::{BookCard, GenreFilter, SortKey, genre_options};

use crate::ui::Navigator;

/// Display mode of the book grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDisplay {
    Grid,
    Hidden,
}

/// A card together with its visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedCard {
    pub card: BookCard,
    pub visible: bool,
}

/// Rendered book listing with its filter and sort controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListing {
    cards: Vec<ListedCard>,
    genre_options: Vec<String>,
    genre_value: String,
    sort_value: String,
    visible_count: usize,
    no_results: bool,
    grid: GridDisplay,
}

impl BookListing {
    /// Listing of `cards` in the given order, all visible.
    #[must_use]
    pub fn new(cards: Vec<BookCard>) -> Self {
        let mut listing = Self {
            cards: cards
                .into_iter()
                .map(|card| ListedCard {
                    card,
                    visible: true,
                })
                .collect(),
            genre_options: Vec::new(),
            genre_value: String::new(),
            sort_value: String::new(),
            visible_count: 0,
            no_results: false,
            grid: GridDisplay::Grid,
        };
        listing.init_recommendation_filters();
        listing.apply_filter();
        listing
    }

    #[must_use]
    pub fn from_books(books: &[Book]) -> Self {
        Self::new(books.iter().map(BookCard::from).collect())
    }

    /// Rebuild the genre dropdown from the cards currently rendered.
    ///
    /// Options are replaced, never appended, so calling this twice does not
    /// duplicate them.
    pub fn init_recommendation_filters(&mut self) {
        let cards: Vec<BookCard> = self.cards.iter().map(|c| c.card.clone()).collect();
        self.genre_options = genre_options(&cards);
    }

    /// Select a genre and show only matching cards. Empty shows everything.
    pub fn filter_books(&mut self, genre: &str) {
        genre.clone_into(&mut self.genre_value);
        self.apply_filter();
        debug!(
            genre = %self.genre_value,
            visible = self.visible_count,
            "Filtered book listing"
        );
    }

    /// Reorder the cards by a sort control value.
    ///
    /// Unknown values leave the order untouched. Visibility travels with
    /// each card, and ties keep their relative order.
    pub fn sort_books(&mut self, sort: &str) {
        sort.clone_into(&mut self.sort_value);
        if let Some(key) = SortKey::parse(sort) {
            self.cards.sort_by(|a, b| key.compare(&a.card, &b.card));
            debug!(sort = key.as_str(), "Sorted book listing");
        }
    }

    /// Clear both controls and reload the page.
    pub fn reset_filters(&mut self, navigator: &dyn Navigator) {
        self.genre_value.clear();
        self.sort_value.clear();
        navigator.reload();
    }

    fn apply_filter(&mut self) {
        let filter = GenreFilter::new(self.genre_value.as_str());
        for listed in &mut self.cards {
            listed.visible = filter.matches(&listed.card);
        }
        self.visible_count = self.cards.iter().filter(|c| c.visible).count();
        self.no_results = self.visible_count == 0;
        self.grid = if self.no_results {
            GridDisplay::Hidden
        } else {
            GridDisplay::Grid
        };
    }

    /// All cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[ListedCard] {
        &self.cards
    }

    /// Visible cards in display order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &BookCard> {
        self.cards.iter().filter(|c| c.visible).map(|c| &c.card)
    }

    #[must_use]
    pub fn genre_options(&self) -> &[String] {
        &self.genre_options
    }

    #[must_use]
    pub fn genre_value(&self) -> &str {
        &self.genre_value
    }

    #[must_use]
    pub fn sort_value(&self) -> &str {
        &self.sort_value
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Whether the "no results" placeholder is shown.
    #[must_use]
    pub const fn shows_no_results(&self) -> bool {
        self.no_results
    }

    #[must_use]
    pub const fn grid_display(&self) -> GridDisplay {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{Event, RecordingUi};

    fn card(genre: &str, title: &str, price: &str, author: &str) -> BookCard {
        BookCard {
            id: title.to_lowercase(),
            genre: genre.to_string(),
            title: title.to_string(),
            price: price.to_string(),
            author: author.to_string(),
        }
    }

    fn listing() -> BookListing {
        BookListing::new(vec![
            card("Fiction", "Emma", "7.50", "Jane Austen"),
            card("Science Fiction", "Dune", "9.99", "Frank Herbert"),
            card("fiction", "Beloved", "", "Toni Morrison"),
            card("History", "SPQR", "15", "Mary Beard"),
        ])
    }

    fn visible_titles(listing: &BookListing) -> Vec<&str> {
        listing.visible_cards().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_new_listing_shows_everything() {
        let listing = listing();
        assert_eq!(listing.visible_count(), 4);
        assert!(!listing.shows_no_results());
        assert_eq!(listing.grid_display(), GridDisplay::Grid);
        assert_eq!(
            listing.genre_options(),
            ["Fiction", "History", "Science Fiction", "fiction"]
        );
    }

    #[test]
    fn test_filter_matches_genre_case_insensitively() {
        let mut listing = listing();
        listing.filter_books("FICTION");
        assert_eq!(visible_titles(&listing), vec!["Emma", "Beloved"]);
        assert_eq!(listing.visible_count(), 2);

        listing.filter_books("");
        assert_eq!(listing.visible_count(), 4);
    }

    #[test]
    fn test_filter_without_matches_hides_grid() {
        let mut listing = listing();
        listing.filter_books("Poetry");
        assert_eq!(listing.visible_count(), 0);
        assert!(listing.shows_no_results());
        assert_eq!(listing.grid_display(), GridDisplay::Hidden);
    }

    #[test]
    fn test_sort_keeps_visibility() {
        let mut listing = listing();
        listing.filter_books("fiction");
        listing.sort_books("price-desc");

        assert_eq!(visible_titles(&listing), vec!["Emma", "Beloved"]);
        let all: Vec<&str> = listing.cards().iter().map(|c| c.card.title.as_str()).collect();
        assert_eq!(all, vec!["SPQR", "Dune", "Emma", "Beloved"]);
    }

    #[test]
    fn test_unknown_sort_keeps_order() {
        let mut listing = listing();
        listing.sort_books("newest");
        assert_eq!(visible_titles(&listing), vec!["Emma", "Dune", "Beloved", "SPQR"]);
        assert_eq!(listing.sort_value(), "newest");
    }

    #[test]
    fn test_init_filters_twice_does_not_duplicate() {
        let mut listing = listing();
        listing.init_recommendation_filters();
        listing.init_recommendation_filters();
        assert_eq!(listing.genre_options().len(), 4);
    }

    #[test]
    fn test_reset_clears_controls_and_reloads() {
        let ui = RecordingUi::default();
        let mut listing = listing();
        listing.filter_books("History");
        listing.sort_books("title");

        listing.reset_filters(&ui);

        assert_eq!(listing.genre_value(), "");
        assert_eq!(listing.sort_value(), "");
        assert_eq!(ui.events(), vec![Event::Reload]);
    }
}
