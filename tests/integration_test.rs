use std::sync::Arc;

use rust_decimal_macros::dec;
use storefront_cart::cart::CartStore;
use storefront_cart::catalog::{CatalogError, ProductQuery};
use storefront_cart::checkout::{
    CheckoutError, CheckoutRequest, OrderSummary, PaymentMethod, ShippingInfo, ShippingOption,
};
use storefront_cart::lifecycle::{StorefrontConfig, StorefrontSystem};
use storefront_cart::model::ProductId;
use storefront_cart::persistence::SlotActor;
use storefront_cart::storage::{DirectoryStore, InMemoryStore, KeyValueStore};

fn config_in(dir: &std::path::Path) -> StorefrontConfig {
    StorefrontConfig {
        data_dir: Some(dir.to_path_buf()),
        ..StorefrontConfig::instant()
    }
}

fn shipping() -> ShippingInfo {
    ShippingInfo {
        first_name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        address: "1 Market Street".to_string(),
        zip: "12345".to_string(),
        ..ShippingInfo::default()
    }
}

/// Browse, fill the cart, restart, and find the cart where it was left.
#[tokio::test]
async fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut system = StorefrontSystem::new(&config_in(dir.path()))
        .await
        .expect("Failed to start system");
    assert!(system.cart.snapshot().is_empty());

    let apparel = system
        .catalog
        .list(ProductQuery::category("apparel"))
        .await
        .expect("Failed to list products");
    assert_eq!(apparel.total, 2);

    for product in &apparel.products {
        system.cart.add_item(&product.to_product(), 2);
    }
    system.cart.decrement_item(&"p1006".into());
    let before = system.cart.snapshot();
    assert_eq!(before.total_items(), 3);
    assert_eq!(before.subtotal(), dec!(179.00));

    let stats = system.shutdown().await.expect("Shutdown failed");
    assert_eq!(stats.writes, 3);
    assert!(dir.path().join("ecom_cart_items.json").exists());

    let system = StorefrontSystem::new(&config_in(dir.path()))
        .await
        .expect("Failed to restart system");
    assert_eq!(system.cart.snapshot(), before);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn corrupted_file_falls_back_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ecom_cart_items.json"), "[{\"id\":").unwrap();

    let mut system = StorefrontSystem::new(&config_in(dir.path())).await.unwrap();
    assert!(system.cart.snapshot().is_empty());

    // the next mutation overwrites the bad payload
    let wallet = system.catalog.get("p1004".into()).await.unwrap();
    system.cart.add_item(&wallet.to_product(), 1);
    system.shutdown().await.unwrap();

    let store = DirectoryStore::open(dir.path()).await.unwrap();
    let saved = store.get("ecom_cart_items").await.unwrap().unwrap();
    assert!(saved.contains("\"p1004\""));
}

#[tokio::test]
async fn full_storage_keeps_the_in_memory_cart() {
    let config = StorefrontConfig {
        storage_quota_bytes: Some(64),
        ..StorefrontConfig::instant()
    };
    let mut system = StorefrontSystem::new(&config).await.unwrap();

    let monitor = system.catalog.get("p1003".into()).await.unwrap();
    system.cart.add_item(&monitor.to_product(), 1);
    let headphones = system.catalog.get("p1001".into()).await.unwrap();
    system.cart.add_item(&headphones.to_product(), 1);

    let stats = system.flush().await;
    assert!(stats.failed_writes >= 1);
    let snapshot = system.cart.snapshot();
    assert_eq!(snapshot.items().len(), 2);
    assert_eq!(snapshot.subtotal(), dec!(649.99));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_clears_the_saved_cart() {
    let dir = tempfile::tempdir().unwrap();
    let mut system = StorefrontSystem::new(&config_in(dir.path())).await.unwrap();

    let espresso = system.catalog.get("p1005".into()).await.unwrap();
    system.cart.add_item(&espresso.to_product(), 1);

    let summary = OrderSummary::from_snapshot(&system.cart.snapshot());
    assert!(summary.qualifies_for_free_shipping());
    assert_eq!(summary.estimated_tax, dec!(60.00));

    let request = CheckoutRequest {
        shipping: shipping(),
        shipping_option: ShippingOption::Express,
        payment_method: PaymentMethod::CreditCard,
    };
    let confirmation = system
        .checkout
        .place_order(&mut system.cart, request.clone())
        .await
        .expect("Order failed");
    assert_eq!(confirmation.order_id, "order_1");
    assert_eq!(confirmation.items[0].id, ProductId::from("p1005"));
    // (799.99 + 15.00) * 8% = 65.1992
    assert_eq!(confirmation.quote.tax, dec!(65.20));
    assert_eq!(confirmation.quote.total, dec!(880.19));
    assert!(system.cart.snapshot().is_empty());

    let again = system.checkout.place_order(&mut system.cart, request).await;
    assert_eq!(again, Err(CheckoutError::EmptyCart));

    system.shutdown().await.unwrap();
    let store = DirectoryStore::open(dir.path()).await.unwrap();
    assert_eq!(store.get("ecom_cart_items").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn catalog_rejects_unknown_products_and_bad_pages() {
    let system = StorefrontSystem::new(&StorefrontConfig::instant()).await.unwrap();

    let missing = system.catalog.get("p0000".into()).await;
    assert_eq!(missing, Err(CatalogError::NotFound("p0000".into())));

    let bad_page = system
        .catalog
        .list(ProductQuery {
            limit: 0,
            ..ProductQuery::default()
        })
        .await;
    assert!(matches!(bad_page, Err(CatalogError::InvalidQuery(_))));

    let page = system
        .catalog
        .list(ProductQuery {
            page: 2,
            limit: 5,
            category: None,
        })
        .await
        .unwrap();
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.products.len(), 1);

    system.shutdown().await.unwrap();
}

/// Two carts on one store: the last writer wins.
#[tokio::test]
async fn separate_carts_share_one_slot() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let (actor, slot) = SlotActor::new(store.clone());
    tokio::spawn(actor.run());

    let mut first = CartStore::open(slot.clone(), "shared").await;
    let mut second = CartStore::open(slot.clone(), "shared").await;
    first.add_item(&storefront_cart::model::Product::new("a", "Widget", dec!(1)), 1);
    second.add_item(&storefront_cart::model::Product::new("b", "Gadget", dec!(2)), 4);
    slot.flush().await.unwrap();

    let reopened = CartStore::open(slot, "shared").await;
    assert_eq!(reopened.snapshot(), second.snapshot());
    assert_eq!(first.snapshot().total_items(), 1);
}
