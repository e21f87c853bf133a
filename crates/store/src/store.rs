//! The cart store: authoritative cart state plus its mutation protocol.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use trolley_core::{Cart, CartError, CartLine, CartResult, CartSnapshot, ProductId};

use crate::policy::StockPolicy;
use crate::ports::{CartRepository, InventoryService, Notifier, CART_STORAGE_KEY};

/// Cart store: owns the cart, enforces stock limits, persists snapshots, and
/// publishes every new cart version to subscribers.
///
/// Every mutation follows the same protocol: read the current cart, validate
/// against freshly fetched stock, build a new sequence, persist it, publish
/// it. Mutations are serialized through one writer lock, so read-modify-write
/// is atomic per store even when operations overlap; readers are never
/// blocked and always see a fully formed cart version.
///
/// Failures are terminal for their invocation: the cart is left unchanged,
/// nothing is persisted, the fixed user-facing message goes to the
/// [`Notifier`], and the caller gets the mapped [`CartError`]. No retries.
pub struct CartStore {
    inventory: Arc<dyn InventoryService>,
    repository: Arc<dyn CartRepository>,
    notifier: Arc<dyn Notifier>,
    policy: StockPolicy,
    /// Writer lock over the authoritative cart.
    state: Mutex<Cart>,
    /// Latest published cart version; also serves lock-free reads.
    published: watch::Sender<Cart>,
}

impl CartStore {
    /// Build a store, adopting the persisted snapshot if one is readable.
    ///
    /// An absent, unreadable, or unsupported-version snapshot is logged and
    /// replaced by an empty cart; hydration never fails. A restored cart is
    /// adopted verbatim, with no revalidation against current stock.
    pub async fn hydrate(
        inventory: Arc<dyn InventoryService>,
        repository: Arc<dyn CartRepository>,
        notifier: Arc<dyn Notifier>,
        policy: StockPolicy,
    ) -> Self {
        let cart = match repository.load(CART_STORAGE_KEY).await {
            Ok(Some(snapshot)) => match snapshot.restore() {
                Ok(cart) => cart,
                Err(err) => {
                    tracing::warn!("stored cart snapshot rejected, starting empty: {err}");
                    Cart::empty()
                }
            },
            Ok(None) => Cart::empty(),
            Err(err) => {
                tracing::warn!("stored cart snapshot unreadable, starting empty: {err:?}");
                Cart::empty()
            }
        };

        let (published, _) = watch::channel(cart.clone());

        Self {
            inventory,
            repository,
            notifier,
            policy,
            state: Mutex::new(cart),
            published,
        }
    }

    /// Current cart sequence.
    ///
    /// Reads the latest published version; two reads without an intervening
    /// mutation return identical sequences.
    pub fn cart(&self) -> Cart {
        self.published.borrow().clone()
    }

    /// Subscribe to cart changes; the receiver starts at the current version.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.published.subscribe()
    }

    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart is incremented by exactly one, provided
    /// its current amount is below stock; a new product is appended with
    /// amount 1. Both the stock and the product lookup happen up front, and a
    /// failure in either maps to [`CartError::AddFailed`].
    pub async fn add_product(&self, id: ProductId) -> CartResult<()> {
        let mut cart = self.state.lock().await;

        let outcome = self.next_cart_for_add(&cart, id).await;
        match outcome {
            Ok(next) => {
                tracing::debug!(product = %id, "product added to cart");
                self.commit(&mut cart, next).await;
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Remove a product's line entirely.
    pub async fn remove_product(&self, id: ProductId) -> CartResult<()> {
        let mut cart = self.state.lock().await;

        if !cart.contains(id) {
            return Err(self.report(CartError::NotFound));
        }

        let next = cart.without(id);
        tracing::debug!(product = %id, "product removed from cart");
        self.commit(&mut cart, next).await;
        Ok(())
    }

    /// Set a product's quantity to `amount` verbatim.
    ///
    /// Validation depends on the configured [`StockPolicy`]; a line that is
    /// not in the cart fails as [`CartError::OutOfStock`] under either
    /// policy.
    pub async fn update_product_amount(&self, id: ProductId, amount: u32) -> CartResult<()> {
        let mut cart = self.state.lock().await;

        let outcome = self.next_cart_for_update(&cart, id, amount).await;
        match outcome {
            Ok(next) => {
                tracing::debug!(product = %id, amount, "cart quantity updated");
                self.commit(&mut cart, next).await;
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    async fn next_cart_for_add(&self, cart: &Cart, id: ProductId) -> CartResult<Cart> {
        let stock = self
            .inventory
            .stock(id)
            .await
            .map_err(|err| CartError::add_failed(err.to_string()))?;
        let product = self
            .inventory
            .product(id)
            .await
            .map_err(|err| CartError::add_failed(err.to_string()))?;

        match cart.line(id) {
            Some(line) if line.amount < stock.amount => Ok(cart.with_incremented(id)),
            Some(_) => Err(CartError::OutOfStock),
            None => Ok(cart.with_new_line(CartLine::first(id, product))),
        }
    }

    async fn next_cart_for_update(
        &self,
        cart: &Cart,
        id: ProductId,
        amount: u32,
    ) -> CartResult<Cart> {
        let stock = self
            .inventory
            .stock(id)
            .await
            .map_err(|err| CartError::update_failed(err.to_string()))?;

        match cart.line(id) {
            Some(line) if self.policy.permits_update(line.amount, amount, stock.amount) => {
                Ok(cart.with_amount(id, amount))
            }
            // A missing line fails the same way as an out-of-stock one.
            _ => Err(CartError::OutOfStock),
        }
    }

    /// Persist and publish a new cart version, then swap it in.
    ///
    /// The save is best-effort: a failed write keeps the new in-memory cart
    /// and is only logged. Persistence and publication happen in the same
    /// step, under the writer lock.
    async fn commit(&self, current: &mut Cart, next: Cart) {
        let snapshot = CartSnapshot::capture(&next);
        if let Err(err) = self.repository.save(CART_STORAGE_KEY, &snapshot).await {
            tracing::warn!("cart snapshot save failed, in-memory state kept: {err:?}");
        }

        *current = next.clone();
        self.published.send_replace(next);
    }

    fn report(&self, err: CartError) -> CartError {
        tracing::debug!(error = %err, "cart operation rejected");
        self.notifier.notify(err.user_message());
        err
    }
}
