//! Driftwood Cart - Pure cart collection transformations.
//!
//! A [`Cart`] is an ordered collection of line-items, unique by SKU. Every
//! operation takes the collection by reference and returns a new collection;
//! nothing in this crate performs I/O or touches shared state. Persisting
//! the result and recomputing the derived aggregates is the job of the
//! `driftwood-client` gateway.
//!
//! # Invariants
//!
//! - No two entries share a SKU; adding an existing SKU merges quantities.
//! - An entry never sits at quantity zero - it is removed instead.
//! - Insertion order among distinct SKUs is preserved.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod collection;
mod line_item;

pub use collection::{Cart, RemovePolicy};
pub use line_item::{LineItem, LineItemError, LineItemInput};
