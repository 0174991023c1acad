//! Driftwood Client - Session state gateway.
//!
//! Mediates cart and session mutations against a named-slot store. The UI
//! layer calls a [`MutationGateway`] method; the gateway reads the current
//! collection from the injected [`StateStore`], applies the pure operation
//! from `driftwood-cart`, and writes the new collection plus the derived
//! aggregates back under their own slots. The cart-drawer visibility flag
//! and the current user live in independent slots that never interact with
//! the collection.
//!
//! Everything here is synchronous and single-threaded; the store is owned
//! by the gateway, so at most one mutation touches it at a time.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod models;
pub mod mutations;
pub mod store;

pub use error::{ClientError, Result};
pub use models::CurrentUser;
pub use mutations::MutationGateway;
pub use store::{InMemoryStore, SlotKey, SlotValue, StateStore, StoreError};
