//! Walks through a storefront session: browse the catalog, fill the cart,
//! review totals, check out, shut down.
//!
//! Reads `storefront.toml` from the working directory when present, then
//! applies `STOREFRONT_*` environment overrides.

use std::path::Path;

use storefront_cart::catalog::ProductQuery;
use storefront_cart::checkout::{
    CheckoutQuote, CheckoutRequest, OrderSummary, PaymentMethod, ShippingInfo, ShippingOption,
};
use storefront_cart::lifecycle::{setup_tracing, StorefrontConfig, StorefrontSystem};
use storefront_cart::model::format_currency;
use tracing::{error, info, Instrument};

const CONFIG_FILE: &str = "storefront.toml";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut config = if Path::new(CONFIG_FILE).exists() {
        StorefrontConfig::load(CONFIG_FILE).map_err(|e| e.to_string())?
    } else {
        StorefrontConfig::default()
    };
    config.apply_env().map_err(|e| e.to_string())?;

    info!(?config, "Starting storefront");
    let mut system = StorefrontSystem::new(&config)
        .await
        .map_err(|e| e.to_string())?;

    if !system.cart.snapshot().is_empty() {
        info!(
            items = system.cart.snapshot().total_items(),
            "Resuming saved cart"
        );
    }

    let span = tracing::info_span!("browsing");
    let page = async {
        let categories = system.catalog.categories().await?;
        info!(?categories, "Categories loaded");
        system.catalog.list(ProductQuery::category("apparel")).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for product in &page.products {
        info!(id = %product.id, name = %product.name, price = %format_currency(product.price), "Listed");
    }

    let span = tracing::info_span!("shopping");
    async {
        for (product, quantity) in page.products.iter().zip([2, 1]) {
            if product.in_stock() {
                system.cart.add_item(&product.to_product(), quantity);
            } else {
                info!(id = %product.id, "Out of stock; skipped");
            }
        }
        match system.catalog.get("p1004".into()).await {
            Ok(wallet) if wallet.in_stock() => system.cart.add_item(&wallet.to_product(), 1),
            Ok(wallet) => info!(id = %wallet.id, "Out of stock; skipped"),
            Err(e) => error!(error = %e, "Lookup failed"),
        }
        if let Some(shirt) = page.products.first() {
            system.cart.decrement_item(&shirt.id);
        }
    }
    .instrument(span)
    .await;

    let snapshot = system.cart.snapshot();
    let summary = OrderSummary::from_snapshot(&snapshot);
    info!(
        items = snapshot.total_items(),
        subtotal = %format_currency(summary.subtotal),
        shipping = %format_currency(summary.shipping),
        tax = %format_currency(summary.estimated_tax),
        total = %format_currency(summary.total),
        "Cart summary"
    );
    if !summary.qualifies_for_free_shipping() {
        info!(
            "Spend {} more for free shipping.",
            format_currency(summary.free_shipping_remaining)
        );
    }

    for option in ShippingOption::ALL {
        let quote = CheckoutQuote::new(summary.subtotal, option);
        info!(
            option = option.name(),
            delivery = option.delivery(),
            cost = %format_currency(option.cost()),
            total = %format_currency(quote.total),
            "Shipping option"
        );
    }

    let request = CheckoutRequest {
        shipping: ShippingInfo {
            first_name: "Alice".to_string(),
            last_name: "Example".to_string(),
            email: "alice@example.com".to_string(),
            address: "1 Market Street".to_string(),
            city: "Springfield".to_string(),
            zip: "12345".to_string(),
            ..ShippingInfo::default()
        },
        shipping_option: ShippingOption::Standard,
        payment_method: PaymentMethod::CreditCard,
    };

    let span = tracing::info_span!("checkout");
    let order = async {
        info!("Placing order");
        system.checkout.place_order(&mut system.cart, request).await
    }
    .instrument(span)
    .await;

    match order {
        Ok(confirmation) => info!(
            order_id = %confirmation.order_id,
            total = %format_currency(confirmation.quote.total),
            "Order placed successfully"
        ),
        Err(e) => error!(error = %e, "Order failed"),
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Session complete");
    Ok(())
}
