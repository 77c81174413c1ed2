//! Genre filtering and sorting over a rendered book listing.
//!
//! A listing is a list of [`BookCard`]s carrying the raw data attributes of
//! each rendered book. Nothing here fetches or persists; filtering and
//! sorting only decide which cards are visible and in what order.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::form::parse_float;
use crate::types::Book;

/// Data attributes of one rendered book card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCard {
    /// Book id the card links to.
    pub id: String,
    pub genre: String,
    pub title: String,
    /// Raw price attribute; may be empty or non-numeric.
    pub price: String,
    pub author: String,
}

impl BookCard {
    /// Numeric price, treating a missing or unparseable value as zero.
    #[must_use]
    pub fn price_value(&self) -> Decimal {
        parse_float(&self.price).unwrap_or(Decimal::ZERO)
    }
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            genre: book.genre.clone().unwrap_or_default(),
            title: book.title.clone(),
            price: book
                .price
                .map(|p| p.amount().to_string())
                .unwrap_or_default(),
            author: book.author.clone(),
        }
    }
}

/// Distinct non-empty genres of the given cards, in ascending order.
#[must_use]
pub fn genre_options(cards: &[BookCard]) -> Vec<String> {
    cards
        .iter()
        .map(|card| card.genre.trim())
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Genre selection of the filter dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter {
    selected: String,
}

impl GenreFilter {
    #[must_use]
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
        }
    }

    /// The "all genres" selection.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Case-insensitive exact match; an empty selection matches every card.
    #[must_use]
    pub fn matches(&self, card: &BookCard) -> bool {
        let selected = self.selected.trim();
        selected.is_empty() || card.genre.trim().to_lowercase() == selected.to_lowercase()
    }
}

/// Sort key of the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
    AuthorAsc,
}

impl SortKey {
    /// Parse a dropdown value. Unknown values (including empty) mean
    /// "keep the current order".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" | "title-asc" => Some(Self::TitleAsc),
            "title-desc" => Some(Self::TitleDesc),
            "price" | "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "author" | "author-asc" => Some(Self::AuthorAsc),
            _ => None,
        }
    }

    /// Convert to dropdown value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleAsc => "title",
            Self::TitleDesc => "title-desc",
            Self::PriceAsc => "price",
            Self::PriceDesc => "price-desc",
            Self::AuthorAsc => "author",
        }
    }

    /// Compare two cards under this key.
    #[must_use]
    pub fn compare(self, a: &BookCard, b: &BookCard) -> Ordering {
        (self.comparator())(a, b)
    }

    fn comparator(self) -> fn(&BookCard, &BookCard) -> Ordering {
        match self {
            Self::TitleAsc => |a: &BookCard, b: &BookCard| locale_compare(&a.title, &b.title),
            Self::TitleDesc => |a: &BookCard, b: &BookCard| locale_compare(&b.title, &a.title),
            Self::PriceAsc => |a: &BookCard, b: &BookCard| a.price_value().cmp(&b.price_value()),
            Self::PriceDesc => |a: &BookCard, b: &BookCard| b.price_value().cmp(&a.price_value()),
            Self::AuthorAsc => |a: &BookCard, b: &BookCard| locale_compare(&a.author, &b.author),
        }
    }
}

/// Sort cards in place. Ties keep their current relative order.
pub fn sort_cards(cards: &mut [BookCard], key: SortKey) {
    cards.sort_by(key.comparator());
}

/// Human-oriented string ordering: case-insensitive first, then ordinal.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
