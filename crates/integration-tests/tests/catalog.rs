//! Book administration and listings, against a mock backend.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use amazin_core::BookId;
use amazin_integration_tests::{UiEvent, storefront_for};
use amazin_storefront::api::BookQuery;
use amazin_storefront::listing::GridDisplay;

fn catalog() -> serde_json::Value {
    json!([
        {"id": "b1", "title": "emma", "author": "Jane Austen", "genre": "Romance", "price": 7.5},
        {"id": "b2", "title": "Dune", "author": "Frank Herbert", "genre": "Science Fiction", "price": 9.99},
        {"id": "b3", "title": "Beloved", "author": "Toni Morrison", "genre": "Fiction"},
        {"id": "b4", "title": "Hyperion", "author": "Dan Simmons", "genre": "science fiction", "price": 8}
    ])
}

#[tokio::test]
async fn test_filter_sort_and_reset_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog()))
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_for(&server, "reader").unwrap();
    let mut listing = storefront.load_books(&BookQuery::default()).await.unwrap();

    listing.filter_books("Science Fiction");
    listing.sort_books("price-desc");
    let titles: Vec<&str> = listing.visible_cards().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Hyperion"]);
    assert_eq!(listing.visible_count(), 2);

    listing.sort_books("title");
    let ids: Vec<&str> = listing.cards().iter().map(|c| c.card.id.as_str()).collect();
    assert_eq!(ids, vec!["b3", "b2", "b1", "b4"]);

    listing.filter_books("Poetry");
    assert!(listing.shows_no_results());
    assert_eq!(listing.grid_display(), GridDisplay::Hidden);

    listing.reset_filters(storefront.navigator());
    assert_eq!(listing.genre_value(), "");
    assert_eq!(ui.events(), vec![UiEvent::Reload]);
}

#[tokio::test]
async fn test_recommendations_fallback_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recommendations/reader"))
        .and(query_param("limit", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "books": catalog(),
            "fallback": true,
            "message": "Popular books"
        })))
        .mount(&server)
        .await;

    let (storefront, _ui) = storefront_for(&server, "reader").unwrap();
    let recs = storefront.load_recommendations(4).await.unwrap();

    assert!(recs.fallback);
    assert_eq!(recs.message, "Popular books");
    assert_eq!(
        recs.listing.genre_options(),
        ["Fiction", "Romance", "Science Fiction", "science fiction"]
    );
}

#[tokio::test]
async fn test_create_then_delete_book() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_json(json!({
            "isbn": "978-0", "title": "Kindred", "description": "", "author": "Octavia E. Butler",
            "publisher": "", "pictureUrl": "", "price": 12.5, "inventory": 4,
            "genre": "Science Fiction", "publicationYear": 1979
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "b9", "title": "Kindred", "author": "Octavia E. Butler"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/books/b9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_for(&server, "admin").unwrap();
    let form: HashMap<String, String> = [
        ("isbn", "978-0"),
        ("title", "Kindred"),
        ("author", "Octavia E. Butler"),
        ("price", "12.50"),
        ("inventory", "4 copies"),
        ("genre", "Science Fiction"),
        ("publicationYear", "1979"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let book = storefront.create_book(&form).await.unwrap();
    storefront.delete_book(&book.id).await.unwrap();

    assert_eq!(book.id, BookId::new("b9"));
    assert_eq!(
        ui.events(),
        vec![
            UiEvent::Alert("Book created successfully!".to_string()),
            UiEvent::Reload,
            UiEvent::Confirm("Are you sure you want to delete this book?".to_string()),
            UiEvent::Alert("Book deleted successfully!".to_string()),
            UiEvent::Reload,
        ]
    );
}
