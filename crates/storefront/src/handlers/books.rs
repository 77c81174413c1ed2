//! Catalog administration handlers.

use tracing::{info, instrument};

use amazin_core::{Book, BookId, BookPayload, FormSource};

use super::Outcome;
use crate::error::Result;
use crate::state::Storefront;

const CREATED: &str = "Book created successfully!";
const CREATE_FAILED: &str = "Failed to create book";
const UPDATED: &str = "Book updated successfully!";
const UPDATE_FAILED: &str = "Failed to update book";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this book?";
const DELETED: &str = "Book deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete book";

/// Page shown after a book is edited.
pub const ADMIN_PAGE: &str = "/admin";

impl Storefront {
    /// Create a book from the book form, then reload.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self, form))]
    pub async fn create_book(&self, form: &impl FormSource) -> Result<Book> {
        let payload = BookPayload::from_form(form);
        match self.client().create_book(&payload).await {
            Ok(book) => {
                info!(book_id = %book.id, title = %book.title, "Book created");
                self.dialogs().alert(CREATED);
                self.navigator().reload();
                Ok(book)
            }
            Err(e) => Err(self.alert_fixed(e, CREATE_FAILED)),
        }
    }

    /// Replace a book's fields from the book form, then go to the admin page.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self, form))]
    pub async fn update_book(&self, book_id: &BookId, form: &impl FormSource) -> Result<Book> {
        let payload = BookPayload::from_form(form);
        match self.client().update_book(book_id, &payload).await {
            Ok(book) => {
                info!(book_id = %book.id, "Book updated");
                self.dialogs().alert(UPDATED);
                self.navigator().navigate(ADMIN_PAGE);
                Ok(book)
            }
            Err(e) => Err(self.alert_fixed(e, UPDATE_FAILED)),
        }
    }

    /// Delete a book after confirmation, then reload.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    #[instrument(skip(self))]
    pub async fn delete_book(&self, book_id: &BookId) -> Result<Outcome> {
        if !self.dialogs().confirm(CONFIRM_DELETE) {
            return Ok(Outcome::Declined);
        }

        match self.client().delete_book(book_id).await {
            Ok(()) => {
                info!(book_id = %book_id, "Book deleted");
                self.dialogs().alert(DELETED);
                self.navigator().reload();
                Ok(Outcome::Done)
            }
            Err(e) => Err(self.alert_fixed(e, DELETE_FAILED)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::handlers::test_support::storefront;
    use crate::ui::testing::Event;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_create_book_alerts_and_reloads() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/books"))
            .and(body_json(json!({
                "isbn": "", "title": "Dune", "description": "", "author": "Frank Herbert",
                "publisher": "", "pictureUrl": "", "price": null, "inventory": 3,
                "genre": "Science Fiction", "publicationYear": null
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "b1", "title": "Dune", "author": "Frank Herbert"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (storefront, ui) = storefront(&server, &[]);
        let form = form(&[
            ("title", "Dune"),
            ("author", "Frank Herbert"),
            ("price", "free"),
            ("inventory", "3"),
            ("genre", "Science Fiction"),
        ]);
        storefront.create_book(&form).await.unwrap();

        assert_eq!(
            ui.events(),
            vec![Event::Alert(CREATED.to_string()), Event::Reload]
        );
    }

    #[tokio::test]
    async fn test_update_book_navigates_to_admin() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/books/b1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "b1", "title": "Dune Messiah", "author": "Frank Herbert"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (storefront, ui) = storefront(&server, &[]);
        let form = form(&[("title", "Dune Messiah"), ("author", "Frank Herbert")]);
        storefront
            .update_book(&BookId::new("b1"), &form)
            .await
            .unwrap();

        assert_eq!(
            ui.events(),
            vec![
                Event::Alert(UPDATED.to_string()),
                Event::Navigate(ADMIN_PAGE.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_failure_alerts() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/books/b1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Book not found with id: b1"
            })))
            .mount(&server)
            .await;

        let (storefront, ui) = storefront(&server, &[]);
        storefront
            .update_book(&BookId::new("b1"), &form(&[]))
            .await
            .unwrap_err();

        assert_eq!(ui.events(), vec![Event::Alert(UPDATE_FAILED.to_string())]);
    }

    #[tokio::test]
    async fn test_delete_book_confirmed() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/books/b1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let (storefront, ui) = storefront(&server, &[true]);
        let outcome = storefront.delete_book(&BookId::new("b1")).await.unwrap();

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            ui.events(),
            vec![
                Event::Confirm(CONFIRM_DELETE.to_string()),
                Event::Alert(DELETED.to_string()),
                Event::Reload,
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_book_declined() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let (storefront, _ui) = storefront(&server, &[false]);
        let outcome = storefront.delete_book(&BookId::new("b1")).await.unwrap();
        assert_eq!(outcome, Outcome::Declined);
    }
}
