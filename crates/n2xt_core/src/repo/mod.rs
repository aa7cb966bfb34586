//! Repository layer over durable key-value records.
//!
//! # Responsibility
//! - Map domain values to and from their storage record encodings.
//! - Isolate record keys and JSON details from services.
//!
//! # Invariants
//! - Write paths validate every value before persisting it.
//! - Read paths reject invalid persisted state with `InvalidData`; services
//!   decide whether to fall back.

pub mod cart_repo;
pub mod theme_repo;
