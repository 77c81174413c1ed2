//! Checkout and order history endpoints.

use tracing::instrument;

use amazin_core::{Order, OrderId, UserId};

use super::{ApiError, BookstoreClient};

impl BookstoreClient {
    /// Convert the user's cart into an order.
    ///
    /// The request has no body; payment is not part of the backend contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend refuses the
    /// order (empty cart, insufficient inventory, ...).
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn checkout(&self, user_id: &UserId) -> Result<Order, ApiError> {
        let url = self.endpoint(&["orders", "checkout", user_id.as_str()])?;
        self.send_json(self.http().post(url)).await
    }

    /// List a user's past orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list_user_orders(&self, user_id: &UserId) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint(&["orders", "user", user_id.as_str()])?;
        self.send_json(self.http().get(url)).await
    }

    /// Get a single order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order does not exist.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn get_order(&self, order_id: &OrderId) -> Result<Order, ApiError> {
        let url = self.endpoint(&["orders", order_id.as_str()])?;
        self.send_json(self.http().get(url)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client(server: &MockServer) -> BookstoreClient {
        BookstoreClient::new(&url::Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_checkout_returns_created_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders/checkout/u1"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "ord-1", "userId": "u1", "items": [], "totalAmount": 0.0,
                "status": "PENDING"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client(&server)
            .await
            .checkout(&UserId::new("u1"))
            .await
            .unwrap();
        assert_eq!(order.id, OrderId::new("ord-1"));
    }

    #[tokio::test]
    async fn test_checkout_insufficient_inventory() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders/checkout/u1"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "Insufficient inventory for book: Dune", "status": 400
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .checkout(&UserId::new("u1"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), Some("Insufficient inventory for book: Dune"));
    }

    #[tokio::test]
    async fn test_list_user_orders() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/user/u1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "ord-1", "status": "CONFIRMED"},
                {"id": "ord-2", "status": "PENDING"}
            ])))
            .mount(&server)
            .await;

        let orders = client(&server)
            .await
            .list_user_orders(&UserId::new("u1"))
            .await
            .unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn test_garbage_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/ord-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .get_order(&OrderId::new("ord-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
