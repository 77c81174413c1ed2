//! Amazin Core - Shared types and pure logic for the bookstore client.
//!
//! This crate provides the pieces used by every Amazin component:
//! - `storefront` - Cart, checkout, and book administration handlers
//! - `cli` - Terminal front end
//!
//! # Architecture
//!
//! The core crate contains only types, traits, and pure functions - no I/O,
//! no HTTP clients, no storage. This keeps it lightweight and deterministic.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, statuses, and backend wire models
//! - [`form`] - The form-data capability and lenient numeric parsing
//! - [`payment`] - Payment field validation and input masks
//! - [`listing`] - Genre filtering and sorting of a book listing
//! - [`stepper`] - Clamped quantity stepper

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod listing;
pub mod payment;
pub mod stepper;
pub mod types;

pub use form::FormSource;
pub use types::*;
