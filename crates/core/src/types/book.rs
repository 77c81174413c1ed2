//! Book catalog types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::BookId;
use super::price::Price;
use crate::form::{FormSource, parse_float, parse_int};

/// Form field ids of the create/edit book forms.
pub mod fields {
    pub const ISBN: &str = "isbn";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const AUTHOR: &str = "author";
    pub const PUBLISHER: &str = "publisher";
    pub const PICTURE_URL: &str = "pictureUrl";
    pub const PRICE: &str = "price";
    pub const INVENTORY: &str = "inventory";
    pub const GENRE: &str = "genre";
    pub const PUBLICATION_YEAR: &str = "publicationYear";
}

/// A book as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inventory: Option<i32>,
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// Request body for creating or replacing a book.
///
/// Numeric fields that fail to parse are sent as `null` and left for the
/// backend to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub isbn: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub publisher: String,
    pub picture_url: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub inventory: Option<i32>,
    pub genre: String,
    pub publication_year: Option<i32>,
}

impl BookPayload {
    /// Build a payload from the current values of a book form.
    #[must_use]
    pub fn from_form(form: &impl FormSource) -> Self {
        let int_field = |id: &str| parse_int(&form.value(id)).and_then(|v| i32::try_from(v).ok());

        Self {
            isbn: form.value(fields::ISBN),
            title: form.value(fields::TITLE),
            description: form.value(fields::DESCRIPTION),
            author: form.value(fields::AUTHOR),
            publisher: form.value(fields::PUBLISHER),
            picture_url: form.value(fields::PICTURE_URL),
            price: parse_float(&form.value(fields::PRICE)),
            inventory: int_field(fields::INVENTORY),
            genre: form.value(fields::GENRE),
            publication_year: int_field(fields::PUBLICATION_YEAR),
        }
    }
}

/// Personalized (or fallback) book recommendations for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    #[serde(default)]
    pub books: Vec<Book>,
    /// True when no similar readers were found and popular books were used.
    #[serde(default)]
    pub fallback: bool,
    #[serde(default)]
    pub message: String,
}
