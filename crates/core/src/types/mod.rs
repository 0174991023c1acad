//! Shared newtype wrappers.

mod price;
mod sku;

pub use price::{CurrencyCode, Price};
pub use sku::{Sku, SkuError};
