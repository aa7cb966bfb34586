//! Cart line item model.
//!
//! # Responsibility
//! - Define the persisted shape of one cart line.
//! - Validate line items on both write and read paths.
//!
//! # Invariants
//! - `id` is non-empty after trimming and unique within one ledger.
//! - `price` is finite and non-negative.
//! - `quantity` is at least 1.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Product key used to deduplicate cart lines.
pub type ProductId = String;

/// One line of the cart ledger.
///
/// Field names are part of the `n2xt-cart` storage record and must not be
/// renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product key, unique within the ledger.
    pub id: ProductId,
    /// Display label captured on first add.
    pub name: String,
    /// Unit price captured on first add.
    pub price: f64,
    /// Number of units; incremented on repeat add.
    pub quantity: u32,
}

/// Validation failures for cart line items.
#[derive(Debug, Clone, PartialEq)]
pub enum CartItemValidationError {
    EmptyId,
    InvalidPrice(f64),
    ZeroQuantity,
}

impl Display for CartItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "cart item id cannot be empty"),
            Self::InvalidPrice(price) => {
                write!(f, "cart item price must be finite and >= 0, got {price}")
            }
            Self::ZeroQuantity => write!(f, "cart item quantity must be at least 1"),
        }
    }
}

impl Error for CartItemValidationError {}

impl CartItem {
    /// Creates a new line with `quantity = 1`.
    ///
    /// # Errors
    /// - Returns `EmptyId` when `id` is blank.
    /// - Returns `InvalidPrice` when `price` is negative, NaN or infinite.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, CartItemValidationError> {
        let item = Self {
            id: id.into().trim().to_string(),
            name: name.into(),
            price,
            quantity: 1,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks the line invariants.
    pub fn validate(&self) -> Result<(), CartItemValidationError> {
        if self.id.trim().is_empty() {
            return Err(CartItemValidationError::EmptyId);
        }
        validate_price(self.price)?;
        if self.quantity == 0 {
            return Err(CartItemValidationError::ZeroQuantity);
        }
        Ok(())
    }

    /// Adds one unit. Saturates at `u32::MAX`.
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Line total (`price * quantity`).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Checks that a price is usable as a cart unit price.
pub fn validate_price(price: f64) -> Result<(), CartItemValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CartItemValidationError::InvalidPrice(price));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CartItem, CartItemValidationError};

    #[test]
    fn new_trims_id_and_starts_at_one() {
        let item = CartItem::new("  p1 ", "Widget", 9.99).expect("valid item");
        assert_eq!(item.id, "p1");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn new_rejects_blank_id_and_bad_price() {
        assert_eq!(
            CartItem::new("   ", "Widget", 1.0).unwrap_err(),
            CartItemValidationError::EmptyId
        );
        assert!(matches!(
            CartItem::new("p1", "Widget", -0.5).unwrap_err(),
            CartItemValidationError::InvalidPrice(_)
        ));
        assert!(matches!(
            CartItem::new("p1", "Widget", f64::NAN).unwrap_err(),
            CartItemValidationError::InvalidPrice(_)
        ));
    }

    #[test]
    fn increment_saturates() {
        let mut item = CartItem::new("p1", "Widget", 0.0).expect("valid item");
        item.quantity = u32::MAX;
        item.increment();
        assert_eq!(item.quantity, u32::MAX);
    }

    #[test]
    fn zero_price_is_allowed() {
        let item = CartItem::new("free", "Sticker", 0.0).expect("zero price is valid");
        assert_eq!(item.line_total(), 0.0);
    }
}
