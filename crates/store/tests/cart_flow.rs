//! Black-box flow tests against the public store surface only.

use std::sync::Arc;

use trolley_core::{CartError, ProductId, ProductInfo};
use trolley_store::memory::{InMemoryInventory, InMemoryRepository, RecordingNotifier};
use trolley_store::{CartStore, StockPolicy};

fn product(title: &str, price: u64) -> ProductInfo {
    ProductInfo {
        title: title.to_string(),
        price,
        image: format!("https://cdn.example.com/{title}.jpg"),
    }
}

async fn store_with(
    inventory: &Arc<InMemoryInventory>,
    repository: &Arc<InMemoryRepository>,
    notifier: &Arc<RecordingNotifier>,
) -> CartStore {
    CartStore::hydrate(
        inventory.clone(),
        repository.clone(),
        notifier.clone(),
        StockPolicy::Legacy,
    )
    .await
}

#[tokio::test]
async fn shopping_session_survives_a_restart() {
    let inventory = Arc::new(InMemoryInventory::new());
    let repository = Arc::new(InMemoryRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());

    inventory.insert(ProductId::new(1), 10, product("tenis-corrida", 25_990));
    inventory.insert(ProductId::new(2), 5, product("sandalia", 9_990));
    inventory.insert(ProductId::new(3), 1, product("chinelo", 3_490));

    let store = store_with(&inventory, &repository, &notifier).await;

    store.add_product(ProductId::new(1)).await.unwrap();
    store.add_product(ProductId::new(1)).await.unwrap();
    store.add_product(ProductId::new(2)).await.unwrap();
    store.add_product(ProductId::new(3)).await.unwrap();
    store
        .update_product_amount(ProductId::new(2), 4)
        .await
        .unwrap();
    store.remove_product(ProductId::new(3)).await.unwrap();

    let before_restart = store.cart();
    assert_eq!(before_restart.len(), 2);
    assert_eq!(before_restart.line(ProductId::new(1)).unwrap().amount, 2);
    assert_eq!(before_restart.line(ProductId::new(2)).unwrap().amount, 4);
    assert!(notifier.messages().is_empty());

    // A new store over the same repository picks the session back up.
    let restarted = store_with(&inventory, &repository, &notifier).await;
    assert_eq!(restarted.cart(), before_restart);
}

#[tokio::test]
async fn the_documented_add_scenario_holds_end_to_end() {
    let inventory = Arc::new(InMemoryInventory::new());
    let repository = Arc::new(InMemoryRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());

    inventory.insert(ProductId::new(1), 10, product("tenis", 17_990));
    let store = store_with(&inventory, &repository, &notifier).await;

    store.add_product(ProductId::new(1)).await.unwrap();
    assert_eq!(store.cart().line(ProductId::new(1)).unwrap().amount, 1);

    store.add_product(ProductId::new(1)).await.unwrap();
    assert_eq!(store.cart().line(ProductId::new(1)).unwrap().amount, 2);

    inventory.set_stock(ProductId::new(1), 2);
    let err = store.add_product(ProductId::new(1)).await.unwrap_err();
    assert_eq!(err, CartError::OutOfStock);
    assert_eq!(store.cart().line(ProductId::new(1)).unwrap().amount, 2);
    assert_eq!(
        notifier.messages(),
        vec!["Quantidade solicitada fora de estoque"]
    );
}

#[tokio::test]
async fn subscribers_track_a_whole_session() {
    let inventory = Arc::new(InMemoryInventory::new());
    let repository = Arc::new(InMemoryRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());

    inventory.insert(ProductId::new(7), 3, product("meia", 1_990));
    let store = store_with(&inventory, &repository, &notifier).await;
    let mut rx = store.subscribe();

    store.add_product(ProductId::new(7)).await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().len(), 1);

    store.remove_product(ProductId::new(7)).await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_empty());
}
