//! Core types for the bookstore client.
//!
//! This module provides type-safe wrappers and wire models for the
//! bookstore backend.

pub mod book;
pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod status;

pub use book::{Book, BookPayload, RecommendationResponse};
pub use cart::{CartError, CartItem, ShoppingCart};
pub use id::*;
pub use order::{Order, OrderItem};
pub use price::Price;
pub use status::*;
