//! Headless storefront session against a running catalog API.
//!
//! Expects the JSON API at `TROLLEY_API_URL` (default `http://localhost:3333`)
//! with `/stock/{id}` and `/products/{id}` routes. Adds two units of product
//! 1, prints the cart, and leaves the snapshot under the user data dir so a
//! second run resumes the session.

use std::sync::Arc;

use trolley_core::ProductId;
use trolley_infra::{FileCartRepository, HttpInventoryService, TracingNotifier};
use trolley_store::{CartStore, StockPolicy};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    trolley_observability::init();

    let api_url = std::env::var("TROLLEY_API_URL")
        .unwrap_or_else(|_| "http://localhost:3333".to_string());

    let inventory = Arc::new(HttpInventoryService::new(api_url));
    let repository = Arc::new(FileCartRepository::in_user_data()?);
    let notifier = Arc::new(TracingNotifier::new());

    let store = CartStore::hydrate(inventory, repository, notifier, StockPolicy::Legacy).await;
    tracing::info!(lines = store.cart().len(), "cart hydrated");

    let id = ProductId::new(1);
    for _ in 0..2 {
        if let Err(err) = store.add_product(id).await {
            tracing::warn!(product = %id, error = %err, "add rejected");
        }
    }

    for line in store.cart().lines() {
        println!(
            "{} x{} — {} ({} cents)",
            line.id, line.amount, line.product.title, line.product.price
        );
    }

    Ok(())
}
