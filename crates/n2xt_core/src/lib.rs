//! Core state for the N2XT storefront.
//! This crate owns the cart ledger, the notification presenter and the
//! durable records they persist; UI glue only calls into it.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::cart_item::{CartItem, CartItemValidationError, ProductId};
pub use model::notification::{Notification, NotificationId, NotificationKind};
pub use model::theme::Theme;
pub use repo::cart_repo::{
    deserialize_items, serialize_items, CartRepository, RepoError, RepoResult,
    StorageCartRepository,
};
pub use repo::theme_repo::ThemeRepository;
pub use service::cart_ledger::{AddOutcome, CartLedger};
pub use service::catalog_filter::{filter_visible, matches_filter, FILTER_ALL};
pub use service::form_service::{validate_form, FieldError, FieldKind, FormField};
pub use service::notification_presenter::{
    DismissReason, NotificationPresenter, PresenterState, TimerHandle, VisibleNotification,
    DEFAULT_AUTO_DISMISS_MS,
};
pub use service::storefront::Storefront;
pub use storage::{
    KeyValueStore, MemoryStore, SqliteStore, StorageError, StorageResult, CART_RECORD_KEY,
    STORE_SCHEMA_VERSION, THEME_RECORD_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
