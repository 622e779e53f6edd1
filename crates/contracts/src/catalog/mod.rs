//! Catalog domain: products, categories and the pipeline that produces them
//! from the published spreadsheet CSV.

pub mod cache;
pub mod csv;
pub mod normalize;
pub mod sample;

use serde::{Deserialize, Serialize};

/// Category assigned to products whose `Category` column is empty or missing.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Description substituted when the `description` column is empty or missing.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Quantity assigned to every size entry parsed from the sheet. The sheet
/// does not carry per-size stock, so this is a fixed default.
pub const DEFAULT_SIZE_QUANTITY: u32 = 10;

/// Size used when a product row has no usable `sizes` column.
pub const DEFAULT_SIZE: &str = "One Size";

/// Images used when a product row has no `imageUrls` column, and as the pool
/// the card view draws from when an image fails to load.
pub const FALLBACK_IMAGE_URLS: [&str; 3] = [
    "https://picsum.photos/seed/storefront-1/480/480",
    "https://picsum.photos/seed/storefront-2/480/480",
    "https://picsum.photos/seed/storefront-3/480/480",
];

/// One selectable size of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub size: String,
    pub quantity: u32,
}

impl SizeOption {
    pub fn new(size: impl Into<String>, quantity: u32) -> Self {
        Self {
            size: size.into(),
            quantity,
        }
    }
}

/// A single catalog item as shown on a product card.
///
/// Invariant (upheld by [`normalize::normalize_row`] and the sample catalog):
/// `name` is non-empty, `sizes` and `image_urls` each hold at least one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Price as published, after stripping a leading "$" and whitespace.
    pub price: String,
    /// Discount as published, "0" when the column is absent.
    pub discount: String,
    /// `price - discount`, or `price` alone when the discount is not numeric.
    /// `None` when the price itself is not numeric; the view renders that as
    /// a blank price rather than failing.
    #[serde(rename = "finalPrice")]
    pub final_price: Option<f64>,
    pub sizes: Vec<SizeOption>,
    #[serde(rename = "imageUrls")]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Numeric discount, used by the card view to decide whether to show the
    /// struck-through original price and the savings badge.
    pub fn discount_amount(&self) -> f64 {
        self.discount.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn has_discount(&self) -> bool {
        self.discount_amount() > 0.0
    }
}

/// The full product list plus the derived category list.
///
/// `categories` always equals the distinct non-empty categories of
/// `products`, in order of first occurrence; the only way to build a catalog
/// is [`Catalog::from_products`], which recomputes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for product in &products {
            let category = product.category.trim();
            if category.is_empty() {
                continue;
            }
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        Self {
            products,
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: name.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            price: "10".to_string(),
            discount: "0".to_string(),
            final_price: Some(10.0),
            sizes: vec![SizeOption::new(DEFAULT_SIZE, DEFAULT_SIZE_QUANTITY)],
            image_urls: vec![FALLBACK_IMAGE_URLS[0].to_string()],
        }
    }

    #[test]
    fn categories_keep_first_occurrence_order() {
        let catalog = Catalog::from_products(vec![
            product("a", "Shoes"),
            product("b", "Shirts"),
            product("c", "Shoes"),
            product("d", "Hats"),
        ]);
        assert_eq!(catalog.categories, vec!["Shoes", "Shirts", "Hats"]);
    }

    #[test]
    fn empty_categories_are_skipped() {
        let catalog = Catalog::from_products(vec![
            product("a", ""),
            product("b", "  "),
            product("c", "Shoes"),
        ]);
        assert_eq!(catalog.categories, vec!["Shoes"]);
        assert_eq!(catalog.products.len(), 3);
    }

    #[test]
    fn discount_flag_follows_parsed_amount() {
        let mut p = product("a", "Shoes");
        assert!(!p.has_discount());
        p.discount = "2.5".to_string();
        assert!(p.has_discount());
        p.discount = "garbage".to_string();
        assert!(!p.has_discount());
    }
}
