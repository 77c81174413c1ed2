//! Command implementations.

pub mod books;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod recommend;
pub mod user;

use amazin_core::listing::BookCard;
use amazin_core::{Price, form::parse_float};
use amazin_storefront::listing::BookListing;

use crate::terminal::say;

/// Print the visible cards of a listing, or the no-results placeholder.
pub fn render_listing(listing: &BookListing) {
    if listing.shows_no_results() {
        say("No books match the selected genre.");
        return;
    }

    for card in listing.visible_cards() {
        say(&format_card(card));
    }
    say(&format!("{} book(s)", listing.visible_count()));
    if !listing.genre_options().is_empty() {
        say(&format!("Genres: {}", listing.genre_options().join(", ")));
    }
}

fn format_card(card: &BookCard) -> String {
    let price = parse_float(&card.price)
        .map_or_else(|| "-".to_string(), |p| Price::new(p).to_string());
    let genre = if card.genre.is_empty() {
        String::new()
    } else {
        format!(" [{}]", card.genre)
    };
    format!(
        "{:<12} {} by {}{genre}  {price}",
        card.id, card.title, card.author
    )
}
