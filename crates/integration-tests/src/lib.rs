//! Integration tests for the Amazin bookstore client.
//!
//! Workflows run against a `wiremock` server standing in for the bookstore
//! backend, with a recording UI in place of a terminal.
//!
//! # Test Categories
//!
//! - `cart_checkout` - Cart changes through checkout to the orders page
//! - `catalog` - Book administration and listings
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p amazin-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use wiremock::MockServer;

use amazin_storefront::api::{ApiError, BookstoreClient};
use amazin_storefront::config::StorefrontConfig;
use amazin_storefront::session::UserStore;
use amazin_storefront::ui::{Dialogs, Navigator, Notifier, ToastKind};
use amazin_storefront::{AppError, Capabilities, Storefront};

/// Something the client did to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Alert(String),
    Confirm(String),
    Reload,
    Navigate(String),
    Toast(String, ToastKind),
}

/// UI capabilities that record every call.
#[derive(Debug, Default)]
pub struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
    answers: Mutex<VecDeque<bool>>,
}

impl RecordingUi {
    /// Answer upcoming confirmations with `answers`, then with `true`.
    pub fn answer(&self, answers: &[bool]) {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(answers);
    }

    #[must_use]
    pub fn events(&self) -> Vec<UiEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return and forget the events recorded so far.
    pub fn drain(&self) -> Vec<UiEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, event: UiEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl Dialogs for RecordingUi {
    fn alert(&self, message: &str) {
        self.push(UiEvent::Alert(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.push(UiEvent::Confirm(message.to_string()));
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(true)
    }
}

impl Navigator for RecordingUi {
    fn reload(&self) {
        self.push(UiEvent::Reload);
    }

    fn navigate(&self, url: &str) {
        self.push(UiEvent::Navigate(url.to_string()));
    }
}

impl Notifier for RecordingUi {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.push(UiEvent::Toast(message.to_string(), kind));
    }
}

/// Storefront for `user_id` against `server`.
///
/// # Errors
///
/// Returns an error if the mock server URI is not a valid base URL.
pub fn storefront_for(
    server: &MockServer,
    user_id: &str,
) -> Result<(Storefront, Arc<RecordingUi>), ApiError> {
    let ui = Arc::new(RecordingUi::default());
    let base = url::Url::parse(&server.uri()).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    let client = BookstoreClient::new(&base)?;
    let storefront = Storefront::new(
        client,
        user_id.into(),
        Capabilities::from_shared(Arc::clone(&ui)),
    );
    Ok((storefront, ui))
}

/// Storefront built from configuration, resolving the user from `storage`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn storefront_from_storage(
    server: &MockServer,
    storage: &dyn UserStore,
) -> Result<(Storefront, Arc<RecordingUi>), AppError> {
    let uri = server.uri();
    let config = StorefrontConfig::from_lookup(|key| {
        (key == "AMAZIN_API_BASE_URL").then(|| uri.clone())
    })?;
    let ui = Arc::new(RecordingUi::default());
    let storefront =
        Storefront::from_config(&config, storage, Capabilities::from_shared(Arc::clone(&ui)))?;
    Ok((storefront, ui))
}
