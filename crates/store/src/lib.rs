//! `trolley-store` — the cart store and its ports.
//!
//! The store owns the authoritative in-memory cart, validates every mutation
//! against freshly fetched stock, keeps the persisted snapshot in step with
//! memory, and publishes each new cart version to subscribers. Collaborators
//! (inventory lookups, snapshot persistence, user notifications) are injected
//! through the traits in [`ports`].

pub mod memory;
pub mod policy;
pub mod ports;
pub mod store;

pub use policy::StockPolicy;
pub use ports::{CartRepository, InventoryService, Notifier, CART_STORAGE_KEY};
pub use store::CartStore;
