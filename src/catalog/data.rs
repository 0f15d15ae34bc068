//! The fixed product list served by the mock catalog.

use rust_decimal::Decimal;

use super::CatalogProduct;

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: &str,
    slug: &str,
    stock: u32,
    rating: f32,
    image: &str,
) -> CatalogProduct {
    CatalogProduct {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        category: category.to_string(),
        slug: slug.to_string(),
        stock,
        rating,
        image_url: format!("/images/{}", image),
    }
}

pub fn mock_products() -> Vec<CatalogProduct> {
    vec![
        product(
            "p1001",
            "Premium Wireless Headphones",
            "Experience crystal clear audio with noise cancellation and 30 hours of battery life.",
            19999,
            "electronics",
            "premium-wireless-headphones",
            45,
            4.7,
            "headphones.jpg",
        ),
        product(
            "p1002",
            "Organic Cotton T-Shirt",
            "Soft, breathable, and sustainably sourced organic cotton tee.",
            2950,
            "apparel",
            "organic-cotton-tshirt",
            120,
            4.5,
            "tshirt.jpg",
        ),
        product(
            "p1003",
            "4K Ultra HD Monitor 32\"",
            "Stunning visuals and high refresh rate perfect for gaming and professional design.",
            45000,
            "electronics",
            "4k-ultra-hd-monitor",
            15,
            4.9,
            "monitor.jpg",
        ),
        product(
            "p1004",
            "Minimalist Leather Wallet",
            "Slim profile, genuine leather, and RFID blocking technology.",
            5500,
            "accessories",
            "minimalist-leather-wallet",
            80,
            4.6,
            "wallet.jpg",
        ),
        product(
            "p1005",
            "Espresso Machine Pro",
            "Professional grade espresso machine for the perfect morning brew.",
            79999,
            "home-goods",
            "espresso-machine-pro",
            8,
            4.8,
            "espresso.jpg",
        ),
        product(
            "p1006",
            "Running Shoes X-Series",
            "Lightweight and responsive running shoes designed for long distances.",
            12000,
            "apparel",
            "running-shoes-x-series",
            60,
            4.4,
            "shoes.jpg",
        ),
    ]
}
