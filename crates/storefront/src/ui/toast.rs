//! Transient toast notifications.
//!
//! [`ToastHost`] drives a [`ToastSurface`] through the toast lifecycle:
//!
//! 1. remove the toast currently on screen, if any
//! 2. insert the new toast (hidden)
//! 3. show it once the runtime has had a turn (the enter frame)
//! 4. hide it after the configured duration
//! 5. remove it after the hide transition
//!
//! At most one toast exists at a time. Each toast gets a fresh [`ToastId`];
//! timers belonging to a replaced toast find a different id current and do
//! nothing.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::{Notifier, ToastKind};
use crate::config::ToastConfig;

/// Identifier of one toast instance.
pub type ToastId = u64;

/// Where toasts are drawn.
pub trait ToastSurface: Send + Sync + 'static {
    /// Add a hidden toast.
    fn insert(&self, id: ToastId, message: &str, kind: ToastKind);
    /// Start the show transition.
    fn show(&self, id: ToastId);
    /// Start the hide transition.
    fn hide(&self, id: ToastId);
    /// Remove the toast element.
    fn remove(&self, id: ToastId);
}

/// Owner of the single toast slot.
pub struct ToastHost<S> {
    inner: Arc<ToastHostInner<S>>,
}

impl<S> Clone for ToastHost<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ToastHostInner<S> {
    surface: S,
    config: ToastConfig,
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    last_id: ToastId,
    current: Option<ToastId>,
}

impl<S: ToastSurface> ToastHost<S> {
    #[must_use]
    pub fn new(surface: S, config: ToastConfig) -> Self {
        Self {
            inner: Arc::new(ToastHostInner {
                surface,
                config,
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// The surface toasts are drawn on.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    /// Id of the toast on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<ToastId> {
        self.inner.lock_slot().current
    }

    /// Replace the current toast with a new one and schedule its lifecycle.
    pub fn show_toast(&self, message: &str, kind: ToastKind) -> ToastId {
        let id = {
            let mut slot = self.inner.lock_slot();
            if let Some(previous) = slot.current.take() {
                self.inner.surface.remove(previous);
            }
            slot.last_id += 1;
            let id = slot.last_id;
            slot.current = Some(id);
            self.inner.surface.insert(id, message, kind);
            id
        };
        debug!(toast_id = id, kind = %kind, "Toast inserted");

        match Handle::try_current() {
            Ok(handle) => {
                let inner = Arc::clone(&self.inner);
                handle.spawn(async move { inner.run_lifecycle(id).await });
            }
            Err(_) => {
                warn!(toast_id = id, "No async runtime, toast will not auto-dismiss");
                self.inner.if_current(id, |surface| surface.show(id));
            }
        }

        id
    }
}

impl<S: ToastSurface> ToastHostInner<S> {
    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `action` only while `id` is still the current toast.
    fn if_current(&self, id: ToastId, action: impl FnOnce(&S)) -> bool {
        let slot = self.lock_slot();
        if slot.current == Some(id) {
            action(&self.surface);
            true
        } else {
            false
        }
    }

    async fn run_lifecycle(&self, id: ToastId) {
        tokio::task::yield_now().await;
        if !self.if_current(id, |surface| surface.show(id)) {
            return;
        }

        tokio::time::sleep(self.config.duration).await;
        if !self.if_current(id, |surface| surface.hide(id)) {
            return;
        }

        tokio::time::sleep(self.config.transition).await;
        let mut slot = self.lock_slot();
        if slot.current == Some(id) {
            self.surface.remove(id);
            slot.current = None;
            debug!(toast_id = id, "Toast dismissed");
        }
    }
}

impl<S: ToastSurface> Notifier for ToastHost<S> {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.show_toast(message, kind);
    }
}
