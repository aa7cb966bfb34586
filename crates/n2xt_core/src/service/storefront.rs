//! UI-facing storefront facade.
//!
//! # Responsibility
//! - Hold the cart ledger, notification presenter and theme for one page
//!   session.
//! - Turn cart adds and form submissions into user notifications.
//!
//! # Invariants
//! - The ledger and presenter never talk to each other directly; this
//!   facade is the only place that notifies on cart changes.
//! - Rejected input shows no notification.
//! - Storage write failures become `warning` notifications and never
//!   propagate to the caller.

use crate::clock::Clock;
use crate::config::CoreConfig;
use crate::model::cart_item::CartItem;
use crate::model::notification::{Notification, NotificationKind};
use crate::model::theme::Theme;
use crate::repo::cart_repo::StorageCartRepository;
use crate::repo::theme_repo::ThemeRepository;
use crate::service::cart_ledger::{AddOutcome, CartLedger};
use crate::service::form_service::{validate_form, FieldError, FormField};
use crate::service::notification_presenter::{NotificationPresenter, TimerHandle};
use crate::storage::KeyValueStore;
use log::{info, warn};

pub const FORM_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const FORM_ERROR_MESSAGE: &str = "Please fix the errors in the form.";
pub const CART_NOT_SAVED_MESSAGE: &str =
    "Your cart could not be saved on this device and will be lost on reload.";

/// Session-scoped storefront state over a borrowed store.
pub struct Storefront<'store, S: KeyValueStore, C: Clock> {
    ledger: CartLedger<StorageCartRepository<&'store S>>,
    themes: ThemeRepository<&'store S>,
    theme: Theme,
    presenter: NotificationPresenter<C>,
}

impl<'store, S: KeyValueStore, C: Clock> Storefront<'store, S, C> {
    /// Loads cart and theme from `store`.
    pub fn open(store: &'store S, clock: C, config: &CoreConfig) -> Self {
        let ledger = CartLedger::load(StorageCartRepository::new(store));
        let themes = ThemeRepository::new(store);
        let theme = match themes.load_theme() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(err) => {
                warn!("event=theme_load module=storefront status=fallback error={err}");
                Theme::default()
            }
        };
        info!(
            "event=storefront_open module=storefront status=ok cart_lines={} theme={}",
            ledger.len(),
            theme.as_str()
        );

        Self {
            ledger,
            themes,
            theme,
            presenter: NotificationPresenter::with_timeout(clock, config.notification_timeout_ms),
        }
    }

    pub fn ledger(&self) -> &CartLedger<StorageCartRepository<&'store S>> {
        &self.ledger
    }

    pub fn cart_items(&self) -> &[CartItem] {
        self.ledger.items()
    }

    pub fn presenter(&self) -> &NotificationPresenter<C> {
        &self.presenter
    }

    /// Add-to-cart button handler.
    pub fn add_to_cart(&mut self, id: &str, name: &str, price: f64) -> AddOutcome {
        let outcome = self.ledger.add(id, name, price);
        match &outcome {
            AddOutcome::Added { .. } => {
                self.presenter
                    .notify(format!("{name} added to cart!"), NotificationKind::Success);
            }
            AddOutcome::AddedNotPersisted { .. } => {
                self.presenter
                    .notify(CART_NOT_SAVED_MESSAGE, NotificationKind::Warning);
            }
            AddOutcome::Rejected(_) => {}
        }
        outcome
    }

    /// Badge value.
    pub fn total_item_count(&self) -> u64 {
        self.ledger.total_item_count()
    }

    /// The badge is hidden while the cart is empty.
    pub fn badge_visible(&self) -> bool {
        self.total_item_count() > 0
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> TimerHandle {
        self.presenter.notify(message, kind)
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.presenter.dismiss()
    }

    pub fn on_timer_elapsed(&mut self, handle: TimerHandle) -> Option<Notification> {
        self.presenter.on_timer_elapsed(handle)
    }

    pub fn poll(&mut self) -> Option<Notification> {
        self.presenter.poll()
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.presenter.current()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists it.
    ///
    /// The new theme applies even when it cannot be saved.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.themes.save_theme(self.theme) {
            warn!("event=theme_save module=storefront status=error error={err}");
        }
        self.theme
    }

    /// Form submit handler. Returns the per-field errors, empty on success.
    pub fn submit_form(&mut self, fields: &[FormField]) -> Vec<FieldError> {
        let errors = validate_form(fields);
        if errors.is_empty() {
            self.presenter
                .notify(FORM_SUCCESS_MESSAGE, NotificationKind::Success);
        } else {
            self.presenter
                .notify(FORM_ERROR_MESSAGE, NotificationKind::Error);
        }
        info!(
            "event=form_submit module=storefront status={} fields={} errors={}",
            if errors.is_empty() { "ok" } else { "invalid" },
            fields.len(),
            errors.len()
        );
        errors
    }
}
