//! The ordered, SKU-unique cart collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use driftwood_core::Sku;

use crate::line_item::{LineItem, LineItemInput};

/// How [`Cart::remove_item`] interprets the payload's quantity field.
///
/// The upstream behavior decrements by exactly one per remove mutation and
/// ignores whatever quantity rides along on the payload; that is
/// [`RemovePolicy::DecrementOne`] and the default. Callers that want a
/// single mutation to remove several units opt into
/// [`RemovePolicy::DecrementRequested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RemovePolicy {
    /// Decrement the entry by one, regardless of the payload quantity.
    #[default]
    DecrementOne,
    /// Decrement the entry by the payload quantity (one when unspecified),
    /// saturating at full removal.
    DecrementRequested,
}

/// An ordered collection of cart line-items, unique by SKU.
///
/// All mutating operations are pure: they leave `self` untouched and return
/// the transformed collection. Serializes transparently as a list of
/// entries, matching the server-shaped `[Item]` the session store holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from existing entries, merging any duplicate SKUs by
    /// summing their quantities so the uniqueness invariant holds for
    /// arbitrary input.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.sku == line.sku) {
                Some(existing) => existing.quantity += line.quantity,
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// The entries, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Look up an entry by SKU.
    #[must_use]
    pub fn get(&self, sku: &Sku) -> Option<&LineItem> {
        self.lines.iter().find(|l| &l.sku == sku)
    }

    /// Number of distinct SKUs in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an item to the cart.
    ///
    /// If an entry with the input's SKU exists, its quantity grows by the
    /// input quantity (one when unspecified); otherwise the item is
    /// appended. An effective quantity of zero leaves the cart unchanged,
    /// since entries never sit at zero.
    #[must_use]
    pub fn add_item(&self, input: &LineItemInput) -> Self {
        let quantity = input.quantity_or_default();
        if quantity == 0 {
            return self.clone();
        }

        let mut next = self.clone();
        match next.lines.iter_mut().find(|l| l.sku == input.sku) {
            Some(existing) => existing.quantity += quantity,
            None => next.lines.push(input.clone().into_line_item()),
        }
        next
    }

    /// Remove units of an item from the cart.
    ///
    /// The decrement amount is chosen by `policy`; an entry whose quantity
    /// reaches zero is dropped entirely. Removing a SKU that is not in the
    /// cart is a no-op, not an error.
    #[must_use]
    pub fn remove_item(&self, input: &LineItemInput, policy: RemovePolicy) -> Self {
        let decrement = match policy {
            RemovePolicy::DecrementOne => 1,
            RemovePolicy::DecrementRequested => input.quantity_or_default(),
        };

        let mut next = self.clone();
        if let Some(existing) = next.lines.iter_mut().find(|l| l.sku == input.sku) {
            existing.quantity = existing.quantity.saturating_sub(decrement);
        }
        next.lines.retain(|l| l.quantity > 0);
        next
    }

    /// Drop the entry with the given SKU entirely, whatever its quantity.
    /// No-op when absent.
    #[must_use]
    pub fn clear_item(&self, sku: &Sku) -> Self {
        let mut next = self.clone();
        next.lines.retain(|l| &l.sku != sku);
        next
    }

    /// Sum of unit price x quantity over all entries. Zero for an empty
    /// cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all entries. Zero for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
