//! Mutation gateway over the session store.
//!
//! One method per client mutation. Cart mutations follow the same shape:
//! read the collection slot, apply the pure operation, write the new
//! collection and both derived aggregates back. The visibility toggle and
//! the current-user setter touch only their own slots.

use tracing::{debug, instrument};

use driftwood_cart::{Cart, LineItemInput, RemovePolicy};
use driftwood_core::Sku;

use crate::error::{ClientError, Result};
use crate::models::CurrentUser;
use crate::store::{SlotKey, SlotValue, StateStore};

/// Applies client mutations to the session store.
///
/// Owns its store; within a session at most one mutation runs at a time.
#[derive(Debug)]
pub struct MutationGateway<S> {
    store: S,
    remove_policy: RemovePolicy,
}

impl<S: StateStore> MutationGateway<S> {
    /// Create a gateway with the default remove policy
    /// ([`RemovePolicy::DecrementOne`]).
    pub fn new(store: S) -> Self {
        Self {
            store,
            remove_policy: RemovePolicy::default(),
        }
    }

    /// Create a gateway with an explicit remove policy.
    pub const fn with_remove_policy(store: S, remove_policy: RemovePolicy) -> Self {
        Self {
            store,
            remove_policy,
        }
    }

    /// Read-only access to the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the gateway and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Toggle the cart-drawer visibility flag and return the new value.
    ///
    /// An unwritten slot reads as `false` (session-start state).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Store`] on backend failure or
    /// [`ClientError::Slot`] if the slot holds a non-boolean value.
    #[instrument(skip(self))]
    pub fn toggle_cart_hidden(&mut self) -> Result<bool> {
        let hidden = match self.store.read(SlotKey::CartHidden)? {
            None => false,
            Some(SlotValue::CartHidden(hidden)) => hidden,
            Some(_) => {
                return Err(ClientError::Slot {
                    key: SlotKey::CartHidden,
                });
            }
        };

        let next = !hidden;
        self.write_slot(SlotValue::CartHidden(next))?;
        debug!(hidden = next, "toggled cart visibility");
        Ok(next)
    }

    /// Add an item to the cart and return the new collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidItem`] for a malformed payload, or a
    /// store/slot error as for any cart mutation.
    #[instrument(skip(self, item), fields(sku = %item.sku))]
    pub fn add_item_to_cart(&mut self, item: &LineItemInput) -> Result<Cart> {
        item.validate()?;
        let cart = self.read_cart()?.add_item(item);
        self.write_cart_slots(&cart)?;
        debug!(count = cart.item_count(), "added item to cart");
        Ok(cart)
    }

    /// Remove units of an item from the cart and return the new
    /// collection. A SKU absent from the cart is a no-op.
    ///
    /// The decrement amount follows the gateway's configured
    /// [`RemovePolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidItem`] for a malformed payload, or a
    /// store/slot error as for any cart mutation.
    #[instrument(skip(self, item), fields(sku = %item.sku))]
    pub fn remove_item_from_cart(&mut self, item: &LineItemInput) -> Result<Cart> {
        item.validate()?;
        let cart = self.read_cart()?.remove_item(item, self.remove_policy);
        self.write_cart_slots(&cart)?;
        debug!(count = cart.item_count(), "removed item from cart");
        Ok(cart)
    }

    /// Drop an item from the cart entirely, whatever its quantity, and
    /// return the new collection. A SKU absent from the cart is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a store/slot error as for any cart mutation.
    #[instrument(skip(self))]
    pub fn clear_item_from_cart(&mut self, sku: &Sku) -> Result<Cart> {
        let cart = self.read_cart()?.clear_item(sku);
        self.write_cart_slots(&cart)?;
        debug!(count = cart.item_count(), "cleared item from cart");
        Ok(cart)
    }

    /// Store the signed-in user and return it.
    ///
    /// Independent of the cart slots.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Store`] on backend failure.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub fn set_current_user(&mut self, user: CurrentUser) -> Result<CurrentUser> {
        self.write_slot(SlotValue::CurrentUser(Box::new(user.clone())))?;
        debug!("set current user");
        Ok(user)
    }

    /// Read the collection slot; an unwritten slot is the empty cart.
    fn read_cart(&self) -> Result<Cart> {
        match self.store.read(SlotKey::CartItems)? {
            None => Ok(Cart::new()),
            Some(SlotValue::CartItems(cart)) => Ok(cart),
            Some(_) => Err(ClientError::Slot {
                key: SlotKey::CartItems,
            }),
        }
    }

    /// Write the collection and both derived aggregates back to the store.
    fn write_cart_slots(&mut self, cart: &Cart) -> Result<()> {
        self.write_slot(SlotValue::ItemCount(cart.item_count()))?;
        self.write_slot(SlotValue::CartTotal(cart.total_price()))?;
        self.write_slot(SlotValue::CartItems(cart.clone()))?;
        Ok(())
    }

    /// Write a value under its own slot, so a value can never land under
    /// the wrong key.
    fn write_slot(&mut self, value: SlotValue) -> Result<()> {
        self.store.write(value.key(), value)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use driftwood_core::{CurrencyCode, Price};

    use crate::store::{InMemoryStore, StoreError};

    use super::*;

    fn gateway() -> MutationGateway<InMemoryStore> {
        MutationGateway::new(InMemoryStore::new())
    }

    fn input(s: &str, minor: i64) -> LineItemInput {
        LineItemInput::new(
            Sku::parse(s).unwrap(),
            Price::from_minor_units(minor, CurrencyCode::USD),
        )
    }

    fn read(gateway: &MutationGateway<InMemoryStore>, key: SlotKey) -> Option<SlotValue> {
        gateway.store().read(key).unwrap()
    }

    #[test]
    fn test_toggle_defaults_to_false_then_flips() {
        let mut gw = gateway();
        assert!(gw.toggle_cart_hidden().unwrap());
        assert!(!gw.toggle_cart_hidden().unwrap());
        assert_eq!(
            read(&gw, SlotKey::CartHidden),
            Some(SlotValue::CartHidden(false))
        );
    }

    #[test]
    fn test_toggle_does_not_touch_cart_slots() {
        let mut gw = gateway();
        gw.add_item_to_cart(&input("A", 1000)).unwrap();
        gw.toggle_cart_hidden().unwrap();
        assert_eq!(read(&gw, SlotKey::ItemCount), Some(SlotValue::ItemCount(1)));
    }

    #[test]
    fn test_add_writes_all_three_cart_slots() {
        let mut gw = gateway();
        let cart = gw
            .add_item_to_cart(&input("A", 1000).with_quantity(2))
            .unwrap();

        assert_eq!(
            read(&gw, SlotKey::CartItems),
            Some(SlotValue::CartItems(cart))
        );
        assert_eq!(
            read(&gw, SlotKey::CartTotal),
            Some(SlotValue::CartTotal(Decimal::new(2000, 2)))
        );
        assert_eq!(read(&gw, SlotKey::ItemCount), Some(SlotValue::ItemCount(2)));
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut gw = gateway();
        let err = gw.add_item_to_cart(&input("A", -500)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidItem(_)));
        // Nothing written on a rejected payload.
        assert_eq!(read(&gw, SlotKey::CartItems), None);
    }

    #[test]
    fn test_remove_follows_configured_policy() {
        let mut gw = MutationGateway::with_remove_policy(
            InMemoryStore::new(),
            RemovePolicy::DecrementRequested,
        );
        gw.add_item_to_cart(&input("A", 1000).with_quantity(5))
            .unwrap();
        let cart = gw
            .remove_item_from_cart(&input("A", 1000).with_quantity(3))
            .unwrap();
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_on_empty_store_is_noop() {
        let mut gw = gateway();
        let cart = gw.remove_item_from_cart(&input("A", 1000)).unwrap();
        assert!(cart.is_empty());
        assert_eq!(
            read(&gw, SlotKey::CartTotal),
            Some(SlotValue::CartTotal(Decimal::ZERO))
        );
    }

    #[test]
    fn test_clear_drops_entry_and_rewrites_aggregates() {
        let mut gw = gateway();
        gw.add_item_to_cart(&input("A", 1000).with_quantity(7))
            .unwrap();
        let cart = gw.clear_item_from_cart(&Sku::parse("A").unwrap()).unwrap();

        assert!(cart.is_empty());
        assert_eq!(read(&gw, SlotKey::ItemCount), Some(SlotValue::ItemCount(0)));
        assert_eq!(
            read(&gw, SlotKey::CartTotal),
            Some(SlotValue::CartTotal(Decimal::ZERO))
        );
    }

    #[test]
    fn test_mismatched_cart_slot_is_an_error() {
        let mut store = InMemoryStore::new();
        store
            .write(SlotKey::CartItems, SlotValue::CartHidden(true))
            .unwrap();
        let mut gw = MutationGateway::new(store);

        let err = gw.add_item_to_cart(&input("A", 1000)).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Slot {
                key: SlotKey::CartItems
            }
        ));
    }

    #[test]
    fn test_set_current_user_round_trips() {
        let mut gw = gateway();
        let user = CurrentUser {
            id: "user-1".to_owned(),
            display_name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            created_at: Utc::now(),
        };
        let returned = gw.set_current_user(user.clone()).unwrap();
        assert_eq!(returned, user);
        assert_eq!(
            read(&gw, SlotKey::CurrentUser),
            Some(SlotValue::CurrentUser(Box::new(user)))
        );
    }

    #[test]
    fn test_written_values_land_under_their_own_keys() {
        let mut gw = gateway();
        gw.add_item_to_cart(&input("A", 1000)).unwrap();
        gw.toggle_cart_hidden().unwrap();
        gw.set_current_user(CurrentUser {
            id: "user-1".to_owned(),
            display_name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            created_at: Utc::now(),
        })
        .unwrap();

        for key in [
            SlotKey::CartItems,
            SlotKey::CartTotal,
            SlotKey::ItemCount,
            SlotKey::CartHidden,
            SlotKey::CurrentUser,
        ] {
            let value = read(&gw, key).unwrap();
            assert_eq!(value.key(), key);
        }
    }

    #[test]
    fn test_store_failure_surfaces() {
        /// Store whose writes always fail.
        struct FailingStore;

        impl StateStore for FailingStore {
            fn read(&self, _key: SlotKey) -> std::result::Result<Option<SlotValue>, StoreError> {
                Ok(None)
            }

            fn write(
                &mut self,
                _key: SlotKey,
                _value: SlotValue,
            ) -> std::result::Result<(), StoreError> {
                Err(StoreError::Backend("disk full".to_owned()))
            }
        }

        let mut gw = MutationGateway::new(FailingStore);
        let err = gw.add_item_to_cart(&input("A", 1000)).unwrap_err();
        assert!(matches!(err, ClientError::Store(_)));
    }
}
