//! # Catalog State
//!
//! Read-only in-memory product catalog, seeded with sample data at
//! startup. Stands in for the backend the storefront does not have: the
//! home grid, search screen and product detail all read from here, and
//! cart/wishlist commands resolve product ids against it.
//!
//! Never mutated after construction, so no lock is needed.

use toko_core::types::Product;
use toko_core::validation::{validate_product, ValidationResult};

/// Suggestions shown on the search screen before the user types.
pub const POPULAR_SEARCHES: [&str; 6] = [
    "iPhone 13",
    "Samsung Galaxy",
    "Laptop Gaming",
    "Nike Air Jordan",
    "PlayStation 5",
    "Nintendo Switch",
];

/// Read-only catalog container injected into the presentation shell.
#[derive(Debug)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    /// Creates the catalog with the built-in sample products.
    pub fn new() -> Self {
        CatalogState {
            products: sample_products(),
        }
    }

    /// Creates the catalog from caller-supplied entries, validating each.
    pub fn with_products(products: Vec<Product>) -> ValidationResult<Self> {
        for product in &products {
            validate_product(product)?;
        }
        Ok(CatalogState { products })
    }

    /// All products, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search over name and store.
    ///
    /// An empty query returns the full catalog (the search screen's
    /// default results).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle) || p.store.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Suggestions for an empty search box.
    pub fn popular_searches(&self) -> &'static [&'static str] {
        &POPULAR_SEARCHES
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// The hardcoded sample catalog.
fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "iPhone 13 Pro Max 256GB".to_string(),
            price_minor: 17_999_000,
            image: "https://images.unsplash.com/photo-1632661674596-df8be070a5c5".to_string(),
            store: "Apple Official Store".to_string(),
            location: "Jakarta Pusat".to_string(),
            description: Some(
                "iPhone 13 Pro Max. Sistem kamera Pro yang paling canggih pada iPhone. \
                 Layar Super Retina XDR dengan ProMotion. Chip A15 Bionic yang sangat cepat. \
                 Ketahanan yang melonjak drastis. Dan kecepatan 5G yang mengesankan."
                    .to_string(),
            ),
            rating: Some(4.9),
            sold: Some(1250),
            stock: Some(50),
        },
        Product {
            id: "2".to_string(),
            name: "Samsung Galaxy S21 Ultra".to_string(),
            price_minor: 15_999_000,
            image: "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf".to_string(),
            store: "Samsung Official Store".to_string(),
            location: "Jakarta Selatan".to_string(),
            description: Some(
                "Samsung Galaxy S21 Ultra. Kamera profesional 108MP. Layar Dynamic AMOLED 2X. \
                 Prosesor Exynos 2100. Baterai 5000mAh dengan pengisian cepat 25W."
                    .to_string(),
            ),
            rating: Some(4.8),
            sold: Some(980),
            stock: Some(35),
        },
    ]
}
