//! Integration tests for Driftwood.
//!
//! These tests drive a [`MutationGateway`] end to end against the in-memory
//! store, the way the UI layer would during a session.
//!
//! # Test Categories
//!
//! - `cart_mutations` - Add/remove/clear flows and derived aggregates
//! - `session_state` - Visibility flag and current-user slots

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use driftwood_cart::LineItemInput;
use driftwood_client::{InMemoryStore, MutationGateway};
use driftwood_core::{CurrencyCode, Price, Sku};

static TRACING: Once = Once::new();

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
/// Useful when debugging a failing scenario with `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A gateway over a fresh, empty in-memory session.
#[must_use]
pub fn session() -> MutationGateway<InMemoryStore> {
    init_tracing();
    MutationGateway::new(InMemoryStore::new())
}

/// A line-item payload priced in USD minor units, quantity unspecified.
///
/// # Panics
///
/// Panics if `sku` is not a valid SKU; test fixtures use literals.
#[must_use]
pub fn usd_item(sku: &str, minor: i64) -> LineItemInput {
    LineItemInput::new(
        Sku::parse(sku).expect("fixture sku"),
        Price::from_minor_units(minor, CurrencyCode::USD),
    )
}

/// Parse a SKU literal.
///
/// # Panics
///
/// Panics if `s` is not a valid SKU; test fixtures use literals.
#[must_use]
pub fn sku(s: &str) -> Sku {
    Sku::parse(s).expect("fixture sku")
}
