//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repositories and the presenter into UI-level entry points.
//! - Keep the UI layer decoupled from storage details.

pub mod cart_ledger;
pub mod catalog_filter;
pub mod form_service;
pub mod notification_presenter;
pub mod storefront;
