//! Cart record repository.
//!
//! # Responsibility
//! - Read and write the `n2xt-cart` record as a JSON array of line items.
//!
//! # Invariants
//! - The encoded sequence keeps ledger order.
//! - Decoding rejects duplicate ids and lines failing `CartItem::validate()`.

use crate::model::cart_item::{CartItem, CartItemValidationError};
use crate::storage::{KeyValueStore, StorageError, CART_RECORD_KEY};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and decoding.
#[derive(Debug)]
pub enum RepoError {
    Validation(CartItemValidationError),
    Storage(StorageError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<CartItemValidationError> for RepoError {
    fn from(value: CartItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Persistence contract for the cart ledger.
pub trait CartRepository {
    /// Returns `Ok(None)` when no cart record exists.
    fn load_items(&self) -> RepoResult<Option<Vec<CartItem>>>;
    fn save_items(&self, items: &[CartItem]) -> RepoResult<()>;
}

/// Cart repository over any key-value store.
pub struct StorageCartRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StorageCartRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> CartRepository for StorageCartRepository<S> {
    fn load_items(&self) -> RepoResult<Option<Vec<CartItem>>> {
        match self.store.get_item(CART_RECORD_KEY)? {
            Some(raw) => Ok(Some(deserialize_items(&raw)?)),
            None => Ok(None),
        }
    }

    fn save_items(&self, items: &[CartItem]) -> RepoResult<()> {
        let encoded = serialize_items(items)?;
        self.store.set_item(CART_RECORD_KEY, &encoded)?;
        Ok(())
    }
}

/// Encodes line items as the `n2xt-cart` JSON array.
pub fn serialize_items(items: &[CartItem]) -> RepoResult<String> {
    for item in items {
        item.validate()?;
    }
    serde_json::to_string(items)
        .map_err(|err| RepoError::InvalidData(format!("failed to encode cart: {err}")))
}

/// Decodes the `n2xt-cart` JSON array.
///
/// # Errors
/// - `InvalidData` for malformed JSON or duplicate ids.
/// - `Validation` for a line that breaks item invariants.
pub fn deserialize_items(raw: &str) -> RepoResult<Vec<CartItem>> {
    let items: Vec<CartItem> = serde_json::from_str(raw)
        .map_err(|err| RepoError::InvalidData(format!("malformed cart record: {err}")))?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(RepoError::InvalidData(format!(
                "duplicate cart item id `{}`",
                item.id
            )));
        }
    }

    Ok(items)
}
