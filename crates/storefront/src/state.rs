//! Storefront context shared by every handler.

use std::sync::Arc;

use tracing::info;

use amazin_core::UserId;

use crate::api::BookstoreClient;
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::session::{CurrentUser, UserStore};
use crate::ui::{Dialogs, Navigator, Notifier};

/// The UI capabilities a front end provides.
#[derive(Clone)]
pub struct Capabilities {
    pub dialogs: Arc<dyn Dialogs>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

impl Capabilities {
    /// Use one value for every capability.
    pub fn from_shared<T>(ui: Arc<T>) -> Self
    where
        T: Dialogs + Navigator + Notifier + 'static,
    {
        Self {
            dialogs: ui.clone(),
            navigator: ui.clone(),
            notifier: ui,
        }
    }
}

/// Backend client, active user, and UI capabilities.
///
/// Cheaply cloneable via `Arc`. The user id is resolved once at
/// construction; handlers never read ambient state.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    client: BookstoreClient,
    user_id: UserId,
    ui: Capabilities,
}

impl Storefront {
    #[must_use]
    pub fn new(client: BookstoreClient, user_id: UserId, ui: Capabilities) -> Self {
        Self {
            inner: Arc::new(StorefrontInner {
                client,
                user_id,
                ui,
            }),
        }
    }

    /// Build a storefront from configuration, resolving the user id from
    /// `storage` (or the configured default).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built for the
    /// configured base URL.
    pub fn from_config(
        config: &StorefrontConfig,
        storage: &dyn UserStore,
        ui: Capabilities,
    ) -> Result<Self, AppError> {
        let client = BookstoreClient::new(&config.api_base_url)?;
        let user_id = CurrentUser::resolve(storage, &config.default_user_id);
        info!(
            api = %config.api_base_url,
            user_id = %user_id,
            "Storefront ready"
        );
        Ok(Self::new(client, user_id, ui))
    }

    #[must_use]
    pub fn client(&self) -> &BookstoreClient {
        &self.inner.client
    }

    /// The active user.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.inner.user_id
    }

    #[must_use]
    pub fn dialogs(&self) -> &dyn Dialogs {
        self.inner.ui.dialogs.as_ref()
    }

    #[must_use]
    pub fn navigator(&self) -> &dyn Navigator {
        self.inner.ui.navigator.as_ref()
    }

    #[must_use]
    pub fn notifier(&self) -> &dyn Notifier {
        self.inner.ui.notifier.as_ref()
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("client", &self.inner.client)
            .field("user_id", &self.inner.user_id)
            .finish_non_exhaustive()
    }
}
