//! Unified error handling for the client gateway.
//!
//! All gateway methods return `Result<T, ClientError>`. The pure cart layer
//! has no failure paths; errors here come from the store or from payload
//! validation at the gateway boundary.

use thiserror::Error;

use driftwood_cart::LineItemError;

use crate::store::{SlotKey, StoreError};

/// Gateway-level error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Store read or write failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A slot held a value of an unexpected kind.
    #[error("slot {key} holds a value of the wrong kind")]
    Slot {
        /// The slot that was read.
        key: SlotKey,
    },

    /// The incoming item payload failed validation.
    #[error("invalid item: {0}")]
    InvalidItem(#[from] LineItemError),
}

/// Result type alias for [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;
