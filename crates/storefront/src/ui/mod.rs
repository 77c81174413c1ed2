//! User-facing capabilities the handlers act through.
//!
//! Handlers never print, prompt, or change pages directly. A front end
//! supplies implementations of these traits; tests supply recording fakes.

mod modal;
mod toast;

pub use modal::CheckoutModal;
pub use toast::{ToastHost, ToastId, ToastSurface};

use std::fmt;

/// Blocking dialogs.
pub trait Dialogs: Send + Sync {
    /// Show a message and wait for acknowledgement.
    fn alert(&self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> bool;
}

/// Page navigation.
pub trait Navigator: Send + Sync {
    /// Re-render the current page from backend state.
    fn reload(&self);

    /// Go to another page, e.g. `/orders?userId=u1`.
    fn navigate(&self, url: &str);
}

/// Non-blocking notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
