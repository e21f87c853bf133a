//! Collaborator traits for the cart store.
//!
//! All three ports are object-safe and `Send + Sync` so implementations can
//! be shared as `Arc<dyn ...>` handles across tasks. Infrastructure failures
//! surface as `anyhow::Error`; the store maps them onto the cart error
//! taxonomy at the operation boundary.

use std::sync::Arc;

use async_trait::async_trait;

use trolley_core::{CartSnapshot, ProductId, ProductInfo, StockInfo};

/// Storage key for the persisted cart snapshot.
///
/// One namespaced constant shared by every session on the same profile.
pub const CART_STORAGE_KEY: &str = "@trolley:cart";

/// Read-only inventory lookups, one request per call.
///
/// `stock` and `product` are independent reads with no transactional
/// coupling. The store imposes no retry or timeout semantics here; a hung
/// call leaves the invoking operation pending with the cart unchanged.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Current available stock for a product.
    async fn stock(&self, id: ProductId) -> anyhow::Result<StockInfo>;

    /// Display attributes for a product.
    async fn product(&self, id: ProductId) -> anyhow::Result<ProductInfo>;
}

#[async_trait]
impl<S> InventoryService for Arc<S>
where
    S: InventoryService + ?Sized,
{
    async fn stock(&self, id: ProductId) -> anyhow::Result<StockInfo> {
        (**self).stock(id).await
    }

    async fn product(&self, id: ProductId) -> anyhow::Result<ProductInfo> {
        (**self).product(id).await
    }
}

/// Key-value persistence for cart snapshots.
///
/// `load` distinguishes "nothing stored" (`Ok(None)`) from "stored but
/// unreadable" (`Err`); hydration treats both as a fresh start. `save` is
/// best-effort from the store's point of view: a failed write is logged and
/// never rolls back the in-memory cart.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self, key: &str) -> anyhow::Result<Option<CartSnapshot>>;

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> anyhow::Result<()>;
}

#[async_trait]
impl<R> CartRepository for Arc<R>
where
    R: CartRepository + ?Sized,
{
    async fn load(&self, key: &str) -> anyhow::Result<Option<CartSnapshot>> {
        (**self).load(key).await
    }

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> anyhow::Result<()> {
        (**self).save(key, snapshot).await
    }
}

/// Fire-and-forget sink for user-facing failure messages.
///
/// No return value is consumed; the store never waits on delivery.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &'static str);
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, message: &'static str) {
        (**self).notify(message)
    }
}
