//! Cart line-item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use driftwood_core::{Price, Sku};

/// Errors raised when validating an incoming line-item payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineItemError {
    /// The unit price is negative.
    #[error("unit price cannot be negative: {amount}")]
    NegativePrice {
        /// The offending amount.
        amount: Decimal,
    },
}

/// An entry in the cart collection.
///
/// `attributes` carries display fields (title, image URL, and whatever else
/// the server shapes onto an item) that the cart passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier the collection keys uniqueness on.
    pub sku: Sku,
    /// Price for a single unit.
    pub unit_price: Price,
    /// Units of this item in the cart. Never zero for an entry that is
    /// actually in a [`Cart`](crate::Cart).
    pub quantity: u32,
    /// Opaque pass-through display attributes.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// The extended price of this entry (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.extend(self.quantity)
    }
}

/// An incoming add/remove payload.
///
/// Mirrors the mutation argument shape: the quantity is optional and
/// defaults to one when unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Identifier of the item being added or removed.
    pub sku: Sku,
    /// Price for a single unit.
    pub unit_price: Price,
    /// Requested quantity; `None` means one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Opaque pass-through display attributes.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl LineItemInput {
    /// Quantity applied when the payload leaves it unspecified.
    pub const DEFAULT_QUANTITY: u32 = 1;

    /// Create an input with an unspecified quantity and no attributes.
    #[must_use]
    pub fn new(sku: Sku, unit_price: Price) -> Self {
        Self {
            sku,
            unit_price,
            quantity: None,
            attributes: Map::new(),
        }
    }

    /// Set an explicit quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// The effective quantity, defaulting to one.
    #[must_use]
    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(Self::DEFAULT_QUANTITY)
    }

    /// Check the payload for values the cart refuses to store.
    ///
    /// Empty identifiers are unrepresentable (`Sku::parse` rejects them)
    /// and so are negative quantities (`u32`), which leaves the unit price
    /// as the only field to check.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::NegativePrice`] if the unit price is
    /// negative.
    pub fn validate(&self) -> Result<(), LineItemError> {
        if self.unit_price.amount.is_sign_negative() && !self.unit_price.amount.is_zero() {
            return Err(LineItemError::NegativePrice {
                amount: self.unit_price.amount,
            });
        }
        Ok(())
    }

    /// Materialize the input as a cart entry, applying the default
    /// quantity.
    #[must_use]
    pub fn into_line_item(self) -> LineItem {
        let quantity = self.quantity_or_default();
        LineItem {
            sku: self.sku,
            unit_price: self.unit_price,
            quantity,
            attributes: self.attributes,
        }
    }
}
