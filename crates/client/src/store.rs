//! Named-slot session store.
//!
//! The session store is a key-value cache keyed by [`SlotKey`]. Slots hold
//! typed values rather than raw JSON so that a cart never silently
//! deserializes into the wrong shape; a mismatched slot surfaces as an
//! explicit error at the gateway.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

use driftwood_cart::Cart;

use crate::models::CurrentUser;

/// The named session-state slots.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SlotKey {
    /// The cart collection itself.
    CartItems,
    /// Derived: sum of line totals.
    CartTotal,
    /// Derived: sum of quantities.
    ItemCount,
    /// Cart-drawer visibility flag. Independent of the collection.
    CartHidden,
    /// The signed-in user, if any.
    CurrentUser,
}

impl SlotKey {
    /// The slot's store name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CartItems => "cartItems",
            Self::CartTotal => "cartTotal",
            Self::ItemCount => "itemCount",
            Self::CartHidden => "cartHidden",
            Self::CurrentUser => "currentUser",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values a slot can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    CartItems(Cart),
    CartTotal(Decimal),
    ItemCount(u32),
    CartHidden(bool),
    CurrentUser(Box<CurrentUser>),
}

impl SlotValue {
    /// The slot this value belongs under.
    #[must_use]
    pub const fn key(&self) -> SlotKey {
        match self {
            Self::CartItems(_) => SlotKey::CartItems,
            Self::CartTotal(_) => SlotKey::CartTotal,
            Self::ItemCount(_) => SlotKey::ItemCount,
            Self::CartHidden(_) => SlotKey::CartHidden,
            Self::CurrentUser(_) => SlotKey::CurrentUser,
        }
    }
}

/// Errors surfaced by a store backend.
#[derive(thiserror::Error, Debug, Clone)]
pub enum StoreError {
    /// The backend failed to serve the request.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Read/write access to the session store.
///
/// The gateway is written against this trait so the domain logic stays
/// testable without any particular cache implementation behind it.
pub trait StateStore {
    /// Read the value under `key`, if one has been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn read(&self, key: SlotKey) -> Result<Option<SlotValue>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn write(&mut self, key: SlotKey, value: SlotValue) -> Result<(), StoreError>;
}

/// Process-local store backed by a `HashMap`. The default backend for a
/// single session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slots: HashMap<SlotKey, SlotValue>,
}

impl InMemoryStore {
    /// Create an empty store. All slots read as unwritten.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn read(&self, key: SlotKey) -> Result<Option<SlotValue>, StoreError> {
        Ok(self.slots.get(&key).cloned())
    }

    fn write(&mut self, key: SlotKey, value: SlotValue) -> Result<(), StoreError> {
        self.slots.insert(key, value);
        Ok(())
    }
}
