//! Catalog endpoints.

use tracing::instrument;

use amazin_core::{Book, BookId, BookPayload};

use super::{ApiError, BookstoreClient};

/// Optional catalog search filters for [`BookstoreClient::list_books`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    /// Backend sort key, e.g. `title`, `price`, `price_desc`, `year`.
    pub sort: Option<String>,
}

impl BookQuery {
    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("title", self.title.as_deref()),
            ("author", self.author.as_deref()),
            ("publisher", self.publisher.as_deref()),
            ("genre", self.genre.as_deref()),
            ("sort", self.sort.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
    }
}

impl BookstoreClient {
    /// List books, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn list_books(&self, query: &BookQuery) -> Result<Vec<Book>, ApiError> {
        let mut url = self.endpoint(&["books"])?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        self.send_json(self.http().get(url)).await
    }

    /// Get a single book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the book does not exist.
    #[instrument(skip(self), fields(book_id = %book_id))]
    pub async fn get_book(&self, book_id: &BookId) -> Result<Book, ApiError> {
        let url = self.endpoint(&["books", book_id.as_str()])?;
        self.send_json(self.http().get(url)).await
    }

    /// Create a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the payload.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create_book(&self, payload: &BookPayload) -> Result<Book, ApiError> {
        let url = self.endpoint(&["books"])?;
        self.send_json(self.http().post(url).json(payload)).await
    }

    /// Replace a book's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the payload.
    #[instrument(skip(self, payload), fields(book_id = %book_id))]
    pub async fn update_book(
        &self,
        book_id: &BookId,
        payload: &BookPayload,
    ) -> Result<Book, ApiError> {
        let url = self.endpoint(&["books", book_id.as_str()])?;
        self.send_json(self.http().put(url).json(payload)).await
    }

    /// Delete a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the book does not exist.
    #[instrument(skip(self), fields(book_id = %book_id))]
    pub async fn delete_book(&self, book_id: &BookId) -> Result<(), ApiError> {
        let url = self.endpoint(&["books", book_id.as_str()])?;
        self.send_empty(self.http().delete(url)).await
    }
}
