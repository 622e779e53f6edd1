//! Built-in fallback catalog shown when neither the feed nor the cache can
//! produce any products. Keeps the page from ever rendering empty.

use super::{Catalog, Product, SizeOption, DEFAULT_SIZE_QUANTITY, FALLBACK_IMAGE_URLS};

/// Fixed two-item catalog used as the last-resort fallback.
pub fn sample_catalog() -> Catalog {
    Catalog::from_products(vec![
        Product {
            id: "sample-1".to_string(),
            name: "Classic T-Shirt".to_string(),
            category: "Shirts".to_string(),
            description: "Soft cotton tee in a relaxed fit.".to_string(),
            price: "12".to_string(),
            discount: "2".to_string(),
            final_price: Some(10.0),
            sizes: vec![
                SizeOption::new("S", DEFAULT_SIZE_QUANTITY),
                SizeOption::new("M", DEFAULT_SIZE_QUANTITY),
                SizeOption::new("L", DEFAULT_SIZE_QUANTITY),
            ],
            image_urls: vec![FALLBACK_IMAGE_URLS[0].to_string()],
        },
        Product {
            id: "sample-2".to_string(),
            name: "Canvas Tote Bag".to_string(),
            category: "Accessories".to_string(),
            description: "Everyday carry-all with reinforced straps.".to_string(),
            price: "8".to_string(),
            discount: "0".to_string(),
            final_price: Some(8.0),
            sizes: vec![SizeOption::new("One Size", DEFAULT_SIZE_QUANTITY)],
            image_urls: vec![FALLBACK_IMAGE_URLS[1].to_string()],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_upholds_product_invariants() {
        let catalog = sample_catalog();
        assert_eq!(catalog.products.len(), 2);
        for product in &catalog.products {
            assert!(!product.name.is_empty());
            assert!(!product.sizes.is_empty());
            assert!(!product.image_urls.is_empty());
        }
        assert_eq!(catalog.categories, vec!["Shirts", "Accessories"]);
    }
}
