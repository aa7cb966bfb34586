//! Domain model for the storefront core.
//!
//! # Responsibility
//! - Define the cart line, notification and theme shapes used by services.
//! - Keep persisted field names stable for the storage records.
//!
//! # Invariants
//! - Cart lines are identified by product id, never by position.
//! - Notifications are identified by a generated id per shown instance.

pub mod cart_item;
pub mod notification;
pub mod theme;
