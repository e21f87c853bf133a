//! In-memory port implementations.
//!
//! Intended for tests and local development; they implement the same traits
//! as the real adapters and add failure injection so the store's error paths
//! can be exercised deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use anyhow::anyhow;
use async_trait::async_trait;

use trolley_core::{CartSnapshot, ProductId, ProductInfo, StockInfo};

use crate::ports::{CartRepository, InventoryService, Notifier};

/// In-memory product catalog with per-call failure injection.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    stock: RwLock<HashMap<ProductId, u32>>,
    products: RwLock<HashMap<ProductId, ProductInfo>>,
    fail_stock: AtomicBool,
    fail_product: AtomicBool,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product with its available stock.
    pub fn insert(&self, id: ProductId, stock: u32, product: ProductInfo) {
        self.stock.write().unwrap().insert(id, stock);
        self.products.write().unwrap().insert(id, product);
    }

    /// Change the available stock for a product between operations.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        self.stock.write().unwrap().insert(id, amount);
    }

    /// Make every subsequent stock lookup fail.
    pub fn fail_stock(&self, fail: bool) {
        self.fail_stock.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent product lookup fail.
    pub fn fail_product(&self, fail: bool) {
        self.fail_product.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl InventoryService for InMemoryInventory {
    async fn stock(&self, id: ProductId) -> anyhow::Result<StockInfo> {
        if self.fail_stock.load(Ordering::SeqCst) {
            return Err(anyhow!("injected stock lookup failure"));
        }
        let stock = self.stock.read().map_err(|_| anyhow!("lock poisoned"))?;
        let amount = stock
            .get(&id)
            .copied()
            .ok_or_else(|| anyhow!("unknown product {id}"))?;
        Ok(StockInfo { id, amount })
    }

    async fn product(&self, id: ProductId) -> anyhow::Result<ProductInfo> {
        if self.fail_product.load(Ordering::SeqCst) {
            return Err(anyhow!("injected product lookup failure"));
        }
        self.products
            .read()
            .map_err(|_| anyhow!("lock poisoned"))?
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown product {id}"))
    }
}

/// In-memory snapshot slot standing in for durable storage.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    slots: Mutex<HashMap<String, CartSnapshot>>,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot stored under the fixed cart key, if any.
    pub fn stored(&self) -> Option<CartSnapshot> {
        self.slots
            .lock()
            .unwrap()
            .get(crate::ports::CART_STORAGE_KEY)
            .cloned()
    }

    /// Seed the fixed cart key directly (e.g., with a doctored snapshot).
    pub fn put(&self, snapshot: CartSnapshot) {
        self.slots
            .lock()
            .unwrap()
            .insert(crate::ports::CART_STORAGE_KEY.to_string(), snapshot);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CartRepository for InMemoryRepository {
    async fn load(&self, key: &str) -> anyhow::Result<Option<CartSnapshot>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(anyhow!("injected snapshot load failure"));
        }
        let slots = self.slots.lock().map_err(|_| anyhow!("lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> anyhow::Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(anyhow!("injected snapshot save failure"));
        }
        self.slots
            .lock()
            .map_err(|_| anyhow!("lock poisoned"))?
            .insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}

/// Notifier that records every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<&'static str>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &'static str) {
        self.messages.lock().unwrap().push(message);
    }
}
