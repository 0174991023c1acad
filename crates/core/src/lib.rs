//! Driftwood Core - Shared types library.
//!
//! This crate provides common types used across all Driftwood components:
//! - `cart` - Pure cart collection transformations
//! - `client` - Client-side state gateway over the session store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access, no
//! framework glue. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe item identifiers and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
