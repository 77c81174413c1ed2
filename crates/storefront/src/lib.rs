//! Amazin Storefront - cart and checkout client for the bookstore backend.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`api`] - REST client for books, cart, orders, and recommendations
//! - [`session`] - Persisted active-user identifier
//! - [`ui`] - Dialog, navigation, and toast capabilities; checkout modal
//! - [`listing`] - Filterable, sortable book listing
//! - [`state`] - The [`Storefront`] context handlers run on
//! - [`handlers`] - User actions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod session;
pub mod state;
pub mod ui;

pub use error::AppError;
pub use handlers::Outcome;
pub use state::{Capabilities, Storefront};
