//! Cart ledger use-case service.
//!
//! # Responsibility
//! - Own the in-memory cart lines for one session.
//! - Persist the full sequence after every mutation.
//!
//! # Invariants
//! - At most one line per product id; repeat adds increment quantity and
//!   keep the first name/price.
//! - Loading never fails: absent, unreadable or invalid records yield an
//!   empty ledger.
//! - A failed write keeps the in-memory mutation.

use crate::model::cart_item::{CartItem, CartItemValidationError};
use crate::repo::cart_repo::{CartRepository, RepoError};
use log::{info, warn};

/// Result of one `add` call.
#[derive(Debug)]
pub enum AddOutcome {
    /// Line inserted or incremented and persisted.
    Added { line: CartItem },
    /// Line inserted or incremented in memory only.
    AddedNotPersisted { line: CartItem, error: RepoError },
    /// Input rejected; ledger unchanged.
    Rejected(CartItemValidationError),
}

impl AddOutcome {
    /// Returns the affected line unless the input was rejected.
    pub fn line(&self) -> Option<&CartItem> {
        match self {
            Self::Added { line } | Self::AddedNotPersisted { line, .. } => Some(line),
            Self::Rejected(_) => None,
        }
    }
}

/// Explicitly owned cart ledger.
pub struct CartLedger<R: CartRepository> {
    repo: R,
    items: Vec<CartItem>,
}

impl<R: CartRepository> CartLedger<R> {
    /// Loads the ledger from `repo`, falling back to empty.
    pub fn load(repo: R) -> Self {
        let items = load_or_empty(&repo);
        Self { repo, items }
    }

    /// Re-reads persisted state, discarding in-memory lines.
    pub fn reload(&mut self) {
        self.items = load_or_empty(&self.repo);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds one unit of a product.
    ///
    /// # Contract
    /// - Blank id or invalid price: `Rejected`, nothing persisted.
    /// - Known id: quantity + 1, name/price untouched.
    /// - New id: appended with quantity 1.
    /// - Persists synchronously before returning.
    pub fn add(&mut self, id: &str, name: &str, price: f64) -> AddOutcome {
        let candidate = match CartItem::new(id, name, price) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!("event=cart_add module=cart status=rejected reason={err}");
                return AddOutcome::Rejected(err);
            }
        };

        let line = match self.items.iter_mut().find(|item| item.id == candidate.id) {
            Some(existing) => {
                existing.increment();
                existing.clone()
            }
            None => {
                self.items.push(candidate.clone());
                candidate
            }
        };

        match self.repo.save_items(&self.items) {
            Ok(()) => {
                info!(
                    "event=cart_add module=cart status=ok item_id={} quantity={} total_items={}",
                    line.id,
                    line.quantity,
                    self.total_item_count()
                );
                AddOutcome::Added { line }
            }
            Err(error) => {
                warn!(
                    "event=cart_save module=cart status=error item_id={} error={}",
                    line.id, error
                );
                AddOutcome::AddedNotPersisted { line, error }
            }
        }
    }

    /// Sum of quantities across all lines; 0 for an empty ledger.
    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Sum of line totals.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

fn load_or_empty<R: CartRepository>(repo: &R) -> Vec<CartItem> {
    match repo.load_items() {
        Ok(Some(items)) => {
            info!(
                "event=cart_load module=cart status=ok lines={}",
                items.len()
            );
            items
        }
        Ok(None) => {
            info!("event=cart_load module=cart status=empty");
            Vec::new()
        }
        Err(err) => {
            warn!("event=cart_load module=cart status=fallback error={err}");
            Vec::new()
        }
    }
}
