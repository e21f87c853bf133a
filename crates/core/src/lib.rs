//! `trolley-core` — cart domain building blocks.
//!
//! This crate contains **pure domain** types (no I/O, no async): product
//! identity, cart lines and the cart sequence, the versioned persistence
//! snapshot, and the error taxonomy.

pub mod cart;
pub mod error;
pub mod product;
pub mod snapshot;

pub use cart::{Cart, CartLine};
pub use error::{CartError, CartResult};
pub use product::{ProductId, ProductInfo, StockInfo};
pub use snapshot::{CartSnapshot, SnapshotError, SNAPSHOT_VERSION};
