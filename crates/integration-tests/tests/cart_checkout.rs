//! Cart to checkout to orders page, against a mock backend.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use amazin_core::payment::fields;
use amazin_core::{BookId, FormSource};
use amazin_integration_tests::{UiEvent, storefront_for, storefront_from_storage};
use amazin_storefront::Outcome;
use amazin_storefront::session::{CurrentUser, MemoryStore};
use amazin_storefront::ui::{CheckoutModal, ToastKind};

fn cart(items: serde_json::Value) -> serde_json::Value {
    json!({"id": "c1", "userId": "reader", "items": items})
}

fn filled_modal() -> CheckoutModal {
    let mut modal = CheckoutModal::new();
    modal.show();
    modal.input(fields::CARD_NAME, "Ada Lovelace");
    modal.input(fields::CARD_NUMBER, "4111 1111 1111 1111");
    modal.input(fields::EXPIRY_DATE, "12/28");
    modal.input(fields::CVV, "123");
    modal.input(fields::BILLING_ADDRESS, "1 Analytical Way");
    modal
}

#[tokio::test]
async fn test_add_update_checkout_and_view_orders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cart/reader/items"))
        .and(body_json(json!({"bookId": "dune", "quantity": 1})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(cart(json!([{"bookId": "dune", "quantity": 1}]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/cart/reader/items/dune"))
        .and(query_param("quantity", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(cart(json!([{"bookId": "dune", "quantity": 2}]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders/checkout/reader"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ord-7", "userId": "reader", "status": "PENDING",
            "items": [{"bookId": "dune", "bookTitle": "Dune", "quantity": 2, "priceAtPurchase": 9.99}],
            "totalAmount": 19.98, "orderDate": "2026-10-19T09:15:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/user/reader"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "ord-7", "userId": "reader", "status": "PENDING",
            "items": [{"bookId": "dune", "bookTitle": "Dune", "quantity": 2, "priceAtPurchase": 9.99}],
            "totalAmount": 19.98, "orderDate": "2026-10-19T09:15:00"
        }])))
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_for(&server, "reader").unwrap();
    let dune = BookId::new("dune");

    storefront.quick_add_to_cart(&dune, "1").await.unwrap();
    storefront.update_cart_quantity(&dune, 2).await.unwrap();
    assert_eq!(
        ui.drain(),
        vec![
            UiEvent::Toast("Added to cart!".to_string(), ToastKind::Success),
            UiEvent::Reload,
        ]
    );

    let mut modal = filled_modal();
    let order = storefront.process_checkout(&mut modal).await.unwrap();
    assert_eq!(order.id.as_str(), "ord-7");
    assert!(!modal.is_visible());
    assert_eq!(modal.value(fields::CARD_NAME), "");
    assert_eq!(
        ui.drain(),
        vec![
            UiEvent::Alert("Order placed successfully! Order ID: ord-7".to_string()),
            UiEvent::Navigate("/orders?userId=reader".to_string()),
        ]
    );

    let orders = storefront.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items[0].line_total().unwrap().to_string(), "$19.98");
}

#[tokio::test]
async fn test_out_of_stock_checkout_keeps_user_on_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders/checkout/reader"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "timestamp": "2026-10-19T09:15:00",
            "message": "Insufficient inventory for book: Dune",
            "status": 400
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_for(&server, "reader").unwrap();
    storefront
        .process_checkout(&mut filled_modal())
        .await
        .unwrap_err();

    let events = ui.events();
    assert_eq!(
        events,
        vec![UiEvent::Alert("Insufficient inventory for book: Dune".to_string())]
    );
    assert!(!events.iter().any(|e| matches!(e, UiEvent::Navigate(_))));
}

#[tokio::test]
async fn test_incomplete_payment_form_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_for(&server, "reader").unwrap();
    let mut modal = CheckoutModal::new();
    storefront.show_checkout_modal(&mut modal);
    modal.input(fields::CARD_NAME, "Ada Lovelace");

    storefront.process_checkout(&mut modal).await.unwrap_err();

    assert!(modal.is_visible());
    assert_eq!(
        ui.events(),
        vec![UiEvent::Alert("Please fill in all payment fields".to_string())]
    );
}

#[tokio::test]
async fn test_declined_remove_sends_nothing_and_accepted_remove_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/cart/reader/items/dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_for(&server, "reader").unwrap();
    ui.answer(&[false, true]);
    let dune = BookId::new("dune");

    assert_eq!(
        storefront.remove_from_cart(&dune).await.unwrap(),
        Outcome::Declined
    );
    assert_eq!(storefront.remove_from_cart(&dune).await.unwrap(), Outcome::Done);

    let confirm = UiEvent::Confirm("Remove this item from your cart?".to_string());
    assert_eq!(
        ui.events(),
        vec![confirm.clone(), confirm, UiEvent::Reload]
    );
}

#[tokio::test]
async fn test_default_user_when_nothing_stored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart/user123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "c9", "userId": "user123", "items": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (storefront, ui) = storefront_from_storage(&server, &MemoryStore::new()).unwrap();
    let view = storefront.view_cart().await.unwrap();

    assert!(view.is_empty());
    assert_eq!(view.total.to_string(), "$0.00");
    assert!(ui.events().is_empty());
}

#[tokio::test]
async fn test_stored_user_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders/checkout/reader-7"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ord-1", "userId": "reader-7", "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    CurrentUser::store(&store, &"reader-7".into()).unwrap();

    let (storefront, ui) = storefront_from_storage(&server, &store).unwrap();
    storefront
        .process_checkout(&mut filled_modal())
        .await
        .unwrap();

    assert!(
        ui.events()
            .contains(&UiEvent::Navigate("/orders?userId=reader-7".to_string()))
    );
}
